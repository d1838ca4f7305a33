//! Magic-byte signatures of the image formats the site serves.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Known signatures mapped to canonical extensions. First match wins.
pub const FILE_SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "png"),
    (b"GIF87a", "gif"),
    (b"GIF89a", "gif"),
    (b"\xff\xd8", "jpg"),
];

/// Bytes to read from the start of a file: the longest signature.
pub fn read_length() -> usize {
    FILE_SIGNATURES.iter().map(|(sig, _)| sig.len()).max().unwrap_or(0)
}

/// Canonical extension for a file header, if the signature is known.
pub fn detect_extension(header: &[u8]) -> Option<&'static str> {
    FILE_SIGNATURES
        .iter()
        .find(|(sig, _)| header.starts_with(sig))
        .map(|(_, ext)| *ext)
}

/// Reads the bounded header of `path` and detects its extension.
pub fn sniff_file(path: &Path) -> io::Result<Option<&'static str>> {
    let mut header = Vec::with_capacity(read_length());
    File::open(path)?
        .take(read_length() as u64)
        .read_to_end(&mut header)?;
    Ok(detect_extension(&header))
}
