//! # Receipt Writer
//!
//! Persists the rendered receipt as a flat text artifact,
//! `receipt-<number>.txt`, under the configured directory.
//!
//! The file handle is scoped to [`ReceiptWriter::persist`]: it is flushed
//! explicitly and closed on every exit path, success or failure. A failure
//! here never undoes a checkout - the cart was cleared before the write was
//! attempted.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use mercat_core::Receipt;

use crate::error::{CliError, CliResult};

/// Writes receipt artifacts under a fixed directory.
pub struct ReceiptWriter {
    dir: PathBuf,
}

impl ReceiptWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ReceiptWriter { dir: dir.into() }
    }

    /// The directory artifacts are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Renders the receipt and writes it to disk, returning the artifact
    /// path.
    ///
    /// ## Errors
    /// Any I/O failure - creating the directory, creating the file, writing,
    /// flushing - maps to [`CliError::ReceiptWrite`] naming the path.
    pub fn persist(&self, receipt: &Receipt) -> CliResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|source| CliError::ReceiptWrite {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(format!("receipt-{}.txt", receipt.number));
        let map_err = |source| CliError::ReceiptWrite {
            path: path.clone(),
            source,
        };

        let mut file = File::create(&path).map_err(map_err)?;
        file.write_all(format!("{receipt}\n").as_bytes())
            .map_err(map_err)?;
        file.flush().map_err(map_err)?;

        debug!(path = %path.display(), "receipt persisted");
        Ok(path)
    }
}
