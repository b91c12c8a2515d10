use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ArchVizError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing output to files
///
/// Implements the OutputPresenter port for diagram text and rendered images.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        ArchVizError::OutputWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Parent must exist; an existing target must not be a symlink
    fn validate_target(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(self.write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        if fs::symlink_metadata(&self.output_path).is_ok() {
            validate_not_symlink(&self.output_path, "write")
                .map_err(|e| self.write_error(e.to_string()))?;
        }
        Ok(())
    }

    fn write(&self, content: &[u8]) -> Result<()> {
        self.validate_target()?;
        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;
        log::info!("Output written to {}", self.output_path.display());
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.write(content.as_bytes())
    }

    fn present_bytes(&self, content: &[u8]) -> Result<()> {
        self.write(content)
    }
}

/// StdoutPresenter adapter for writing output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| {
                if content.ends_with('\n') {
                    Ok(())
                } else {
                    stdout.write_all(b"\n")
                }
            })
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))
    }

    fn present_bytes(&self, content: &[u8]) -> Result<()> {
        io::stdout()
            .write_all(content)
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))
    }
}
