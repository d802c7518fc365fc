use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Writes `content` to a file that must not exist yet.
///
/// The file is opened with `create_new`, so an existing file is never
/// truncated even if it appeared after the preconditions were checked.
pub fn create_new_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(crate::constants::files::FILE_MODE);
    }

    let mut file = options.open(dest_path).map_err(|e| Error::ProcessError {
        operation: format!("create '{}'", dest_path.display()),
        e,
    })?;
    file.write_all(content.as_bytes()).map_err(|e| Error::ProcessError {
        operation: format!("write '{}'", dest_path.display()),
        e,
    })
}

/// Appends `content` to an existing file. The file is never created.
pub fn append_to_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let mut file = OpenOptions::new().append(true).open(dest_path).map_err(|e| {
        Error::ProcessError { operation: format!("open '{}'", dest_path.display()), e }
    })?;
    file.write_all(content.as_bytes()).map_err(|e| Error::ProcessError {
        operation: format!("append to '{}'", dest_path.display()),
        e,
    })
}

/// Size in bytes of an existing regular file, or `None` when there is no
/// such file.
pub fn existing_file_len<P: AsRef<Path>>(path: P) -> Result<Option<u64>> {
    match std::fs::metadata(path.as_ref()) {
        Ok(metadata) if metadata.is_file() => Ok(Some(metadata.len())),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::IoError(e)),
    }
}

/// Whether the last byte of a non-empty file is `\n`.
pub fn ends_with_newline<P: AsRef<Path>>(path: P) -> Result<bool> {
    let mut file = File::open(path.as_ref())?;
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
