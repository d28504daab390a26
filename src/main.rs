//! rcrypt command-line interface
//!
//! `rcrypt -e|-d -k <key> -f <infile> -o <outfile>` encrypts or decrypts one
//! file and writes one output file. `rcrypt -t -k <key> -f <infile>` runs a
//! round trip over the input and reports how long each direction took.
//! A failed run prints a single diagnostic to stderr and exits nonzero;
//! partially written output files are not cleaned up.

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use rand::rngs::OsRng;

use rcrypt::prelude::{decrypt, encrypt, parse_components, RsaKey};

const USAGE: &str = "\
rcrypt -- encrypt or decrypt a file with textbook RSA

Usage:
  rcrypt -e -k <key_components_file> -f <infile> -o <outfile>
  rcrypt -d -k <key_components_file> -f <infile> -o <outfile>
  rcrypt -t -k <key_components_file> -f <infile>

  -e   Encrypt the input file
  -d   Decrypt the input file
  -t   Round-trip test: encrypt the input, decrypt the result, report timings

The key components file is the clear-text dump OpenSSL produces:
  openssl genrsa -out rsa_priv.pem 1024
  openssl rsa -in rsa_priv.pem -text -out rsa_priv_components.txt";

fn main() {
    let args: Vec<String> = env::args().collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    match args.get(1).map(String::as_str) {
        Some("-t") if flags_match(args, &["-k", "-f"]) => test_case(&args[3], &args[5]),
        Some("-e") if flags_match(args, &["-k", "-f", "-o"]) => {
            encrypt_file(&args[3], &args[5], &args[7])
        }
        Some("-d") if flags_match(args, &["-k", "-f", "-o"]) => {
            decrypt_file(&args[3], &args[5], &args[7])
        }
        _ => {
            eprintln!("{USAGE}");
            process::exit(2);
        }
    }
}

/// The flags are positional: `-k` then `-f` then (for encrypt/decrypt) `-o`,
/// each followed by its value.
fn flags_match(args: &[String], flags: &[&str]) -> bool {
    args.len() >= 2 + flags.len() * 2
        && flags
            .iter()
            .enumerate()
            .all(|(i, flag)| args[2 + i * 2] == *flag)
}

fn load_key(path: &str) -> Result<RsaKey, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_components(&text)?)
}

fn read_input(path: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(format!("input file '{path}' is empty").into());
    }
    Ok(bytes)
}

fn encrypt_file(keyfile: &str, infile: &str, outfile: &str) -> Result<(), Box<dyn Error>> {
    let key = load_key(keyfile)?;
    let message = read_input(infile)?;
    let cipher = encrypt(&mut OsRng, &key, &message)?;
    fs::write(outfile, &cipher)?;
    println!(
        "encrypted {} bytes into {} blocks of {} bytes: {}",
        message.len(),
        cipher.len() / key.modulus_width(),
        key.modulus_width(),
        outfile
    );
    Ok(())
}

fn decrypt_file(keyfile: &str, infile: &str, outfile: &str) -> Result<(), Box<dyn Error>> {
    let key = load_key(keyfile)?;
    let cipher = read_input(infile)?;
    let message = decrypt(&key, &cipher)?;
    fs::write(outfile, &message)?;
    println!(
        "decrypted {} blocks into {} bytes: {}",
        cipher.len() / key.modulus_width(),
        message.len(),
        outfile
    );
    Ok(())
}

/// Encrypt the input next to itself as `<stem>_encr.bin`, decrypt that into
/// `<stem>_decr<ext>`, verify the round trip and report timings.
fn test_case(keyfile: &str, infile: &str) -> Result<(), Box<dyn Error>> {
    let path = Path::new(infile);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or("please provide a valid input file name")?;
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let encr_path = dir.join(format!("{stem}_encr.bin"));
    let decr_path = match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => dir.join(format!("{stem}_decr.{ext}")),
        None => dir.join(format!("{stem}_decr")),
    };

    let key = load_key(keyfile)?;
    let message = read_input(infile)?;

    let started = Instant::now();
    let cipher = encrypt(&mut OsRng, &key, &message)?;
    let encrypt_time = started.elapsed();
    fs::write(&encr_path, &cipher)?;

    let started = Instant::now();
    let recovered = decrypt(&key, &cipher)?;
    let decrypt_time = started.elapsed();
    fs::write(&decr_path, &recovered)?;

    if recovered != message {
        return Err("round trip mismatch: decrypted output differs from the input".into());
    }

    println!(
        "{} bytes -> {} cipher blocks of {} bytes",
        message.len(),
        cipher.len() / key.modulus_width(),
        key.modulus_width()
    );
    println!("time to encrypt: {} ms", encrypt_time.as_millis());
    println!("time to decrypt: {} ms", decrypt_time.as_millis());
    println!(
        "wrote {} and {}",
        encr_path.display(),
        decr_path.display()
    );
    Ok(())
}
