use std::fs;
use std::io;
use std::path::Path;

/// Reads a whole corpus file into memory.
///
/// Invalid UTF-8 sequences are replaced rather than rejected: they are
/// non-printable anyway and `text::sanitize` turns them into spaces.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let bytes = fs::read(filename)?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}
