//! Size-rotated append-only log file.
//!
//! Lines are appended to `path`. When the next line would push the file past
//! `max_bytes` the file is shifted to `path.1`, existing backups move up by one
//! (`path.1` → `path.2`, ...) and anything beyond `keep` backups is deleted.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default rotation threshold (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated backups kept next to the live file.
pub const DEFAULT_KEEP: usize = 3;

#[derive(Debug, Default)]
struct Handle {
    file: Option<File>,
    size: u64,
}

/// Thread-safe rotating line writer.
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    keep: usize,
    handle: Mutex<Handle>,
}

impl RotatingFile {
    #[must_use]
    pub fn new(path: PathBuf, max_bytes: u64, keep: usize) -> Self {
        Self {
            path,
            max_bytes,
            keep,
            handle: Mutex::new(Handle::default()),
        }
    }

    /// Appends `line` plus a newline, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from opening, renaming or writing the files, or
    /// an error if the internal lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("rotation lock poisoned: {e}")))?;

        if handle.file.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            handle.size = file.metadata()?.len();
            handle.file = Some(file);
        }

        let incoming = line.len() as u64 + 1;
        if handle.size > 0 && handle.size + incoming > self.max_bytes {
            handle.file = None;
            self.rotate()?;
            handle.file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
            handle.size = 0;
        }

        let file = handle
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file not open"))?;
        writeln!(file, "{line}")?;
        file.flush()?;
        handle.size += incoming;

        Ok(())
    }

    fn rotate(&self) -> io::Result<()> {
        if self.keep == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.keep))?;
        for n in (1..self.keep).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }

    /// `profiledeck-spans.jsonl` → `profiledeck-spans.jsonl.{n}`.
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn appends_lines_without_rotation_below_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let writer = RotatingFile::new(path.clone(), 1024, 3);

        writer.write_line("a").unwrap();
        writer.write_line("b").unwrap();

        assert_eq!(read(&path), "a\nb\n");
        assert!(!dir.path().join("spans.jsonl.1").exists());
    }

    #[test]
    fn rotates_and_keeps_a_bounded_number_of_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let writer = RotatingFile::new(path.clone(), 6, 2);

        for line in ["11111", "22222", "33333", "44444"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(&path), "44444\n");
        assert_eq!(read(&dir.path().join("spans.jsonl.1")), "33333\n");
        assert_eq!(read(&dir.path().join("spans.jsonl.2")), "22222\n");
        assert!(!dir.path().join("spans.jsonl.3").exists());
    }

    #[test]
    fn picks_up_existing_file_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        fs::write(&path, "old-line\n").unwrap();

        let writer = RotatingFile::new(path.clone(), 12, 1);
        writer.write_line("new").unwrap();

        assert_eq!(read(&path), "new\n");
        assert_eq!(read(&dir.path().join("spans.jsonl.1")), "old-line\n");
    }

    #[test]
    fn zero_backups_truncates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let writer = RotatingFile::new(path.clone(), 4, 0);

        writer.write_line("abc").unwrap();
        writer.write_line("def").unwrap();

        assert_eq!(read(&path), "def\n");
        assert!(!dir.path().join("spans.jsonl.1").exists());
    }
}
