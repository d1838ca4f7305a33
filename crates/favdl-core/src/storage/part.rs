//! Sequential writer for one download.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::temp_path;

/// Temp file for a single download. Writes are buffered; [`PartFile::finalize`]
/// flushes, fsyncs and renames into place. Dropping an unfinalized `PartFile`
/// closes the handle and deletes the temp file.
pub struct PartFile {
    file: Option<BufWriter<File>>,
    temp_path: PathBuf,
    final_path: PathBuf,
}

impl PartFile {
    /// Create (or truncate) `final_path` + `.part`.
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(PartFile {
            file: Some(BufWriter::new(file)),
            temp_path,
            final_path: final_path.to_path_buf(),
        })
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    pub fn final_path(&self) -> &Path {
        &self.final_path
    }

    /// Flush, sync and rename the temp file to the final path. Consumes the writer and closes the file.
    pub fn finalize(mut self) -> Result<()> {
        let Some(writer) = self.file.take() else {
            anyhow::bail!("part file already closed: {}", self.temp_path.display());
        };
        let file = writer
            .into_inner()
            .map_err(|e| e.into_error())
            .with_context(|| format!("flush {}", self.temp_path.display()))?;
        file.sync_all().context("storage sync failed")?;
        drop(file);

        std::fs::rename(&self.temp_path, &self.final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                self.temp_path.display(),
                self.final_path.display()
            )
        })?;
        // Renamed: nothing left for Drop to clean up.
        self.temp_path = PathBuf::new();
        Ok(())
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "part file closed"))
    }
}

impl Write for PartFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

impl Drop for PartFile {
    fn drop(&mut self) {
        // Close before unlinking.
        drop(self.file.take());
        if self.temp_path.as_os_str().is_empty() {
            return;
        }
        match std::fs::remove_file(&self.temp_path) {
            Ok(()) => tracing::debug!(path = %self.temp_path.display(), "removed unfinished part file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.temp_path.display(), "could not remove part file: {}", e),
        }
    }
}
