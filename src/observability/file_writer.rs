//! Rotating file writer with size-based rotation and backup retention.
//!
//! Plugs into `tracing-subscriber` as a [`MakeWriter`] so the fmt layer can
//! write log lines to a file that never grows without bound.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// When the current file exceeds the size limit it is renamed to
/// `<name>.1`, existing backups shift up by one (`.1` → `.2` → `.3`) and the
/// oldest is removed. A fresh file is opened on the next write.
///
/// # Thread Safety
///
/// An internal `Mutex` serializes writes, so one instance can back a global
/// subscriber.
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    max_size: u64,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer for `file_path`. The file is not opened until the
    /// first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_max_size(file_path, MAX_FILE_SIZE_BYTES)
    }

    pub(crate) const fn with_max_size(file_path: PathBuf, max_size: u64) -> Self {
        Self {
            file_path,
            max_size,
            writer: Mutex::new(None),
        }
    }

    /// Appends `bytes` to the file, rotating first if it is too large.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors during rotation, opening or writing, and
    /// when the lock was poisoned by a panicking writer.
    pub fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(bytes)?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_size {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Shifts backups up by one and moves the current file to `.1`.
    fn rotate_files(&self) -> io::Result<()> {
        let oldest = backup_path(&self.file_path, MAX_BACKUP_FILES);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for n in (1..MAX_BACKUP_FILES).rev() {
            let from = backup_path(&self.file_path, n);
            if from.exists() {
                fs::rename(&from, backup_path(&self.file_path, n + 1))?;
            }
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, backup_path(&self.file_path, 1))?;
        }
        Ok(())
    }
}

fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

/// Borrowed handle handed to the fmt layer for one log record.
#[derive(Debug)]
pub struct FileWriterHandle<'a>(&'a FileWriter);

impl Write for FileWriterHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileWriterHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriterHandle(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_across_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("aurawalls.log");
        let writer = FileWriter::new(path.clone());

        writer.write_bytes(b"one\n").unwrap();
        writer.make_writer().write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn rotation_keeps_three_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("aurawalls.log");
        let writer = FileWriter::with_max_size(path.clone(), 4);

        for i in 0..6 {
            writer.write_bytes(format!("line {i}\n").as_bytes()).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line 5\n");
        assert_eq!(fs::read_to_string(backup_path(&path, 1)).unwrap(), "line 4\n");
        assert_eq!(fs::read_to_string(backup_path(&path, 3)).unwrap(), "line 2\n");
        assert!(!backup_path(&path, 4).exists());
    }
}
