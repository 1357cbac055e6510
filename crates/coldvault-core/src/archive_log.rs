//! Archive-ID scraping from free-form log files.
//!
//! A log line looks like `  Size:     10,  Archive ID: xyz-001`. Everything
//! after the `Archive ID:` marker, trimmed, is taken as the id. There is no
//! schema: a line either contains the marker or it is skipped.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use tracing::trace;

use crate::Result;
use crate::VaultError;

/// Literal that precedes an archive id on a log line.
pub const ARCHIVE_ID_MARKER: &str = "Archive ID:";

/// File read by the `delete` action.
pub const DEFAULT_ARCHIVE_LOG: &str = "archive.txt";

/// Extracts the archive id from a single line.
///
/// Returns `None` when the marker is absent or nothing follows it.
///
/// # Examples
///
/// ```
/// use coldvault_core::archive_log::extract_archive_id;
///
/// assert_eq!(extract_archive_id("Size: 10,  Archive ID: xyz-001\n"), Some("xyz-001"));
/// assert_eq!(extract_archive_id("no marker here"), None);
/// ```
#[must_use]
pub fn extract_archive_id(line: &str) -> Option<&str> {
    let start = line.find(ARCHIVE_ID_MARKER)? + ARCHIVE_ID_MARKER.len();
    let id = line[start..].trim();
    if id.is_empty() { None } else { Some(id) }
}

/// Lazy iterator over the archive ids of a text stream.
///
/// Lines that are not valid UTF-8 are skipped like lines without the marker.
/// Read errors end the iteration with a single `Err`.
pub struct ArchiveIds<R> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> ArchiveIds<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for ArchiveIds<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    let Ok(line) = std::str::from_utf8(&self.buf) else {
                        trace!("skipping non UTF-8 line");
                        continue;
                    };
                    if let Some(id) = extract_archive_id(line) {
                        return Some(Ok(id.to_string()));
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(VaultError::Io(e)));
                }
            }
        }
        None
    }
}

/// Collects every archive id from `reader`.
pub fn read_archive_ids<R: BufRead>(reader: R) -> Result<Vec<String>> {
    ArchiveIds::new(reader).collect()
}

/// Reads the archive ids of a log file.
///
/// The file is opened, read to the end and closed before this returns.
///
/// # Errors
///
/// Returns [`VaultError::File`] if the file cannot be opened or read.
pub fn read_archive_ids_from_path(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| VaultError::File {
        path: path.to_path_buf(),
        source,
    })?;
    read_archive_ids(BufReader::new(file)).map_err(|e| match e {
        VaultError::Io(source) => VaultError::File {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
