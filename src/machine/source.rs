//! Source text providers.
//!
//! Loading program text is a thin collaborator outside the pipeline core:
//! a provider either yields the complete source text or fails with
//! [`VmError::Load`].

use crate::machine::errors::VmError;
use std::fs;
use std::path::PathBuf;

/// Supplies program source text to the pipeline.
pub trait SourceProvider {
    /// Returns the complete source text, or [`VmError::Load`] if it is
    /// unavailable.
    fn load(&self) -> Result<String, VmError>;
}

/// Loads source text from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SourceProvider for FileSource {
    fn load(&self) -> Result<String, VmError> {
        fs::read_to_string(&self.path).map_err(|e| VmError::Load {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Holds source text in memory. Loading never fails.
#[derive(Debug, Clone)]
pub struct StringSource(pub String);

impl SourceProvider for StringSource {
    fn load(&self) -> Result<String, VmError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_load_error() {
        let source = FileSource::new("/nonexistent/program.sm");
        let err = source.load().unwrap_err();
        assert!(matches!(err, VmError::Load { ref path, .. } if path.contains("program.sm")));
    }

    #[test]
    fn string_source_yields_its_text() {
        let source = StringSource("5 3 + . quit".to_string());
        assert_eq!(source.load().unwrap(), "5 3 + . quit");
    }
}
