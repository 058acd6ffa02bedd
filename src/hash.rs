//! BLAKE3 hashing for installed command verification

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{Result, file_not_found, file_read_failed};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of in-memory command content
pub fn hash_content(content: &str) -> String {
    format!("{}{}", HASH_PREFIX, blake3::hash(content.as_bytes()).to_hex())
}

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(file_not_found(path.display().to_string()));
    }

    let read_err = |e: std::io::Error| file_read_failed(path.display().to_string(), e.to_string());

    let file = File::open(path).map_err(read_err)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(read_err)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}
