use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn hash_matches_known_sha256() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("abc.txt");
    fs::write(&path, "abc").unwrap();

    let hash = compute_file_hash(&path).unwrap();
    let hex: String = hash.iter().map(|b| format!("{b:02x}")).collect();
    assert_eq!(
        hex,
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn hash_streams_files_larger_than_one_chunk() {
    let temp = TempDir::new().unwrap();
    let big = temp.path().join("big.bin");
    let same = temp.path().join("same.bin");
    let content = vec![b'x'; HASH_CHUNK_SIZE * 2 + 17];
    fs::write(&big, &content).unwrap();
    fs::write(&same, &content).unwrap();

    assert_eq!(
        compute_file_hash(&big).unwrap(),
        compute_file_hash(&same).unwrap()
    );
}

#[test]
fn hash_nonexistent_returns_error() {
    let result = compute_file_hash(Path::new("does/not/exist.c"));
    assert!(matches!(result, Err(SweepError::FileRead { .. })));
}

#[test]
fn registry_flags_second_identical_hash() {
    let mut registry = DuplicateRegistry::new();
    let hash = [7u8; 32];

    assert!(!registry.observe(hash));
    assert!(registry.observe(hash));
    assert!(registry.observe(hash));
}

#[test]
fn registry_distinguishes_one_byte_change() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a.c");
    let b = temp.path().join("b.c");
    fs::write(&a, "int x;\n").unwrap();
    fs::write(&b, "int y;\n").unwrap();

    let mut registry = DuplicateRegistry::new();
    assert!(!registry.observe(compute_file_hash(&a).unwrap()));
    assert!(!registry.observe(compute_file_hash(&b).unwrap()));
}
