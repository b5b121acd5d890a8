use std::path::PathBuf;

use crate::ports::outbound::OutputPresenter;
use crate::shared::{GateError, Result};

/// OutputPresenter adapter that writes the summary to a file.
pub struct FileSystemWriter {
    path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        std::fs::write(&self.path, content).map_err(|e| GateError::FileWriteError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
