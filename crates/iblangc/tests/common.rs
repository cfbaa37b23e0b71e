use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A source file checked into this crate
pub fn ib_file(name: &str) -> PathBuf {
    Path::new("ib_files").join(name)
}

/// Writes `src` to a temporary `.ib` file
pub fn write_source(src: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".ib")
        .tempfile()
        .expect("could not create temp file");
    write!(file, "{src}").expect("could not write");
    file
}
