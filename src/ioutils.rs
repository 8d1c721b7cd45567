use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Creates the project directory, which must not exist yet.
///
/// Only the last path component is created; the parent has to be present.
pub fn create_project_dir<P: AsRef<Path>>(project_dir: P) -> Result<()> {
    let project_dir = project_dir.as_ref();
    std::fs::create_dir(project_dir).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => {
            Error::ProjectDirectoryExists { path: project_dir.to_path_buf() }
        }
        _ => Error::IoError(e),
    })
}

/// Streams `source_path` into `dest_path` without reading it into memory.
///
/// Returns the number of bytes copied.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<u64> {
    let mut reader = BufReader::new(File::open(source_path.as_ref())?);
    let mut writer = BufWriter::new(File::create(dest_path.as_ref())?);
    let copied = std::io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(copied)
}

/// Creates a directory inside the project unless it already exists.
pub fn create_dir<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    match std::fs::create_dir(dest_path.as_ref()) {
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        other => other.map_err(Error::IoError),
    }
}
