use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Counts the lines in the file at `path`.
pub fn count_lines(path: &Path) -> io::Result<u64> {
    let file = File::open(path)?;
    count_lines_in(BufReader::new(file))
}

/// Counts `\n` terminators, plus one for trailing content without a terminator.
///
/// `\r\n` counts once; a lone `\r` is ordinary content.
pub fn count_lines_in<R: BufRead>(mut reader: R) -> io::Result<u64> {
    let mut lines = 0u64;
    let mut last_byte: Option<u8> = None;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        lines += bytecount::count(buf, b'\n') as u64;
        last_byte = buf.last().copied();

        let len = buf.len();
        reader.consume(len);
    }

    // unterminated final line
    if matches!(last_byte, Some(b) if b != b'\n') {
        lines += 1;
    }

    Ok(lines)
}
