use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes inspected when guessing whether a file is binary.
pub const SNIFF_LEN: u64 = 512;

/// Reports whether the first [`SNIFF_LEN`] bytes of `path` contain a NUL byte.
///
/// This is a heuristic. Text with an embedded NUL is reported as binary, and a
/// binary file without a NUL in its prefix is reported as text. A file shorter
/// than the prefix is judged on the bytes it has.
pub fn is_likely_binary(path: &Path) -> io::Result<bool> {
    let file = File::open(path)?;
    let mut prefix = Vec::with_capacity(SNIFF_LEN as usize);
    file.take(SNIFF_LEN).read_to_end(&mut prefix)?;
    Ok(prefix.contains(&0))
}
