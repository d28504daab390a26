//! Block pipeline benchmarks under a 1024-bit key

use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use rcrypt_bignum::BigUint;
use rcrypt_rsa::{decrypt, encrypt, RsaKey};

const K1024: [&str; 8] = [
    "97cf81be5f4ff175bc1608f5d7f1b5bb9e5804aaa2d104ab2fb5101f2513777a17fb069e82b369d9b6a8b4fcd5e3577cd8ce0175f82f522ff6237a32c291ef1e59a6dbf1b358f77b88f62591c842c52f3ba2e6e7825112ddb4ed5ac6a6bc89ed3a987dd97bd799dc726e50afad8ffff41582149599b461e9fbba4edb80766c0b",
    "10001",
    "2ecc6637b49425606101fdf32385bcbb40bdeb7a5ac4ca86a7274ef7faeafc5ae4079b6bc3e8e1099f78748ab8b8e3a076095383f5654915c5effbdca8046accd8ef9e39a2ff7c96e3c96ca94d38d179c0691345d03e56761cc2850a968caa7f366367bdc463cf659826ae40528160c4e50ea6080ed041c61518bc72dc272e49",
    "f51e30652bc5b16f1b2c0b94f3eee5beedb9536a54a5db44f1f611a28b32d1e68eba7f3daff6aa0fec593d44a6608ee9b9b14227f331deaafd9ca85b0a82bc55",
    "9e8cdcbfab212f8a1612fb4d0dad42b636bd1745d5fe5b9da323ddbcad1dc54ea572971b44d51777c883d193d87ebc5155523219db44fc545bb57f53b5e0e6df",
    "63e9173ed5b5b21a20903674536d87f5e7fe07532b07a3b5998e7c27ade75c09471a1b6d30813156663705b32ac1e6debbd2d5ad650269c976b0592b2ac09935",
    "815d4bcc73b3eb170f35c3a7b62e154d995225c80c77b286e7929f1c905fc71a8971fb0afbd9a6814cb109724965f6ffa1cf2423e6bddde872bf9f394d20491f",
    "a8c30f21a98499e3fe41b0b22caa0ace2b056990b145ae701d4690f249d4c4282951b38f17bf3a92dd088e9a2b9d25ea08f964f6ac388bac67efa29f0eec75be",
];

fn key() -> RsaKey {
    let h = |s: &str| BigUint::from_hex_str(s).unwrap();
    RsaKey::new(
        h(K1024[0]),
        h(K1024[1]),
        h(K1024[2]),
        h(K1024[3]),
        h(K1024[4]),
        h(K1024[5]),
        h(K1024[6]),
        h(K1024[7]),
    )
    .unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let key = key();
    let message = vec![0xabu8; 1024];
    let cipher = {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        encrypt(&mut rng, &key, &message).unwrap()
    };

    c.bench_function("encrypt_1kib_1024_bit", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        b.iter(|| encrypt(&mut rng, &key, &message).unwrap())
    });
    c.bench_function("decrypt_1kib_1024_bit", |b| {
        b.iter(|| decrypt(&key, &cipher).unwrap())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
