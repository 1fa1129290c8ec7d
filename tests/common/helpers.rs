use runtar::{LocalFileReader, TarExtractor};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Tar block size used by the synthetic archive builder
pub const BLOCK: usize = 512;

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Appends one ustar header block with a correct checksum
pub fn write_header(out: &mut Vec<u8>, name: &str, size: u64, typeflag: u8) {
    let mut hdr = [0u8; BLOCK];

    let name_bytes = name.as_bytes();
    let name_len = name_bytes.len().min(100);
    hdr[..name_len].copy_from_slice(&name_bytes[..name_len]);
    hdr[100..108].copy_from_slice(b"0000644\0");
    hdr[108..116].copy_from_slice(b"0000000\0");
    hdr[116..124].copy_from_slice(b"0000000\0");

    let mut size_field = [b'0'; 11];
    let mut v = size;
    for i in (0..11).rev() {
        size_field[i] = b'0' + ((v & 7) as u8);
        v >>= 3;
    }
    hdr[124..135].copy_from_slice(&size_field);
    hdr[135] = 0;
    hdr[136..148].copy_from_slice(b"00000000000\0");
    hdr[156] = typeflag;
    hdr[257..263].copy_from_slice(b"ustar\0");
    hdr[263..265].copy_from_slice(b"00");

    // Checksum is computed with the checksum field itself set to spaces
    for b in &mut hdr[148..156] {
        *b = b' ';
    }
    let sum: u32 = hdr.iter().map(|&b| b as u32).sum();
    let chk = format!("{:06o}\0 ", sum);
    hdr[148..156].copy_from_slice(chk.as_bytes());

    out.extend_from_slice(&hdr);
}

/// Appends a complete member: header, payload, and block padding
pub fn append_member(out: &mut Vec<u8>, name: &str, typeflag: u8, payload: &[u8]) {
    write_header(out, name, payload.len() as u64, typeflag);
    out.extend_from_slice(payload);
    let padded = payload.len().div_ceil(BLOCK) * BLOCK;
    out.extend_from_slice(&vec![0u8; padded - payload.len()]);
}

/// Appends the two end-of-archive zero blocks
pub fn finish_archive(out: &mut Vec<u8>) {
    out.extend_from_slice(&[0u8; BLOCK]);
    out.extend_from_slice(&[0u8; BLOCK]);
}

/// Builds a terminated archive containing only regular-file members
pub fn build_archive(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut out = Vec::new();
    for (name, payload) in members {
        append_member(&mut out, name, b'0', payload);
    }
    finish_archive(&mut out);
    out
}

/// Writes archive bytes to a file in `dir` and returns its path
pub fn write_temp_archive(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("Failed to write temporary archive");
    path
}

/// Opens and indexes an on-disk archive
pub fn open_extractor(path: &Path) -> runtar::Result<TarExtractor<LocalFileReader>> {
    let reader = Arc::new(LocalFileReader::new(path)?);
    TarExtractor::new(reader)
}

/// Asserts that a file exists with exactly the expected contents
pub fn assert_file_contents(path: &Path, expected: &[u8]) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
    let actual = fs::read(path).expect("Failed to read extracted file");
    assert_eq!(actual, expected, "Content mismatch at path: {:?}", path);
}
