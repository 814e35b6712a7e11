use std::fs;
use std::path::PathBuf;

use isaac32::rng::Isaac32;
use isaac32::tools::{cipher_file, parse_size, write_stream};
use isaac32::ToolError;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("isaac32-{}-{}", std::process::id(), name))
}

#[test]
fn file_cipher_round_trip() {
    // Length deliberately not a multiple of 4, and longer than one chunk.
    let plain: Vec<u8> = (0..10_003u32).map(|i| (i % 253) as u8).collect();

    let source = temp_path("plain.txt");
    let encoded = temp_path("plain.isaac32");
    let decoded = temp_path("plain.decoded");
    fs::write(&source, &plain).unwrap();

    let n = cipher_file(&source, &encoded, b"swordfish").unwrap();
    assert_eq!(n, plain.len() as u64);

    let cipher_text = fs::read(&encoded).unwrap();
    assert_eq!(cipher_text.len(), plain.len());
    assert_ne!(cipher_text, plain);

    cipher_file(&encoded, &decoded, b"swordfish").unwrap();
    assert_eq!(fs::read(&decoded).unwrap(), plain);

    for path in [source, encoded, decoded] {
        fs::remove_file(path).unwrap();
    }
}

#[test]
fn file_cipher_wrong_password_does_not_decode() {
    let plain = b"attack at dawn, bring snacks".to_vec();

    let source = temp_path("wrong.txt");
    let encoded = temp_path("wrong.isaac32");
    let decoded = temp_path("wrong.decoded");
    fs::write(&source, &plain).unwrap();

    cipher_file(&source, &encoded, b"swordfish").unwrap();
    cipher_file(&encoded, &decoded, b"swordfisH").unwrap();
    assert_ne!(fs::read(&decoded).unwrap(), plain);

    for path in [source, encoded, decoded] {
        fs::remove_file(path).unwrap();
    }
}

#[test]
fn file_cipher_refuses_same_path() {
    let path = temp_path("same.bin");
    fs::write(&path, b"untouched").unwrap();

    let err = cipher_file(&path, &path, b"pw").unwrap_err();
    assert!(matches!(err, ToolError::SamePath(_)));
    assert_eq!(fs::read(&path).unwrap(), b"untouched");

    fs::remove_file(path).unwrap();
}

#[test]
fn file_cipher_missing_source_creates_nothing() {
    let source = temp_path("does-not-exist");
    let dest = temp_path("never-created");

    let err = cipher_file(&source, &dest, b"pw").unwrap_err();
    assert!(matches!(err, ToolError::Io { ref path, .. } if *path == source));
    assert!(!dest.exists());
}

#[test]
fn size_tokens() {
    assert_eq!(parse_size("23MiB").unwrap(), 23 * 1024 * 1024);
    assert_eq!(parse_size("1GB").unwrap(), 1_000_000_000);
    assert_eq!(parse_size("max").unwrap(), u64::MAX);
    assert!(parse_size("twelve").is_err());
}

#[test]
fn malformed_size_produces_no_output() {
    let mut out = Vec::new();
    let result = parse_size("12Q").and_then(|size| {
        write_stream(&mut Isaac32::new(), size, &mut out, "mem")
    });

    assert!(matches!(result, Err(ToolError::InvalidSize(_))));
    assert!(out.is_empty());
}

#[test]
fn streamed_kib_matches_reader() {
    let size = parse_size("3KiB").unwrap();
    let mut out = Vec::new();
    write_stream(&mut Isaac32::from_seed(b"swordfish"), size, &mut out, "mem").unwrap();

    assert_eq!(out, Isaac32::from_seed(b"swordfish").read_bytes(3 * 1024));
}
