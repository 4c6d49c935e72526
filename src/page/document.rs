use std::io;
use std::path::{Path, PathBuf};

/// Coarse classification of a document read failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadErrorKind {
    NotFound,
    Io,
}

#[derive(thiserror::Error, Debug)]
pub enum DocumentReadError {
    #[error("document not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read document {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentReadError {
    pub fn kind(&self) -> ReadErrorKind {
        match self {
            DocumentReadError::NotFound { .. } => ReadErrorKind::NotFound,
            DocumentReadError::Io { .. } => ReadErrorKind::Io,
        }
    }

    fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            DocumentReadError::NotFound { path }
        } else {
            DocumentReadError::Io { path, source }
        }
    }
}

/// The document the page is built from.
///
/// Holds only the configured path; every [`load`](Self::load) goes back to
/// disk.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    path: PathBuf,
}

impl DocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document as text.
    ///
    /// A relative path is resolved against the working directory at the
    /// time of the call.
    pub fn load(&self) -> Result<String, DocumentReadError> {
        let path = self.resolve()?;
        let text = std::fs::read_to_string(&path)
            .map_err(|e| DocumentReadError::from_io(path.clone(), e))?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document");
        Ok(text)
    }

    fn resolve(&self) -> Result<PathBuf, DocumentReadError> {
        if self.path.is_absolute() {
            return Ok(self.path.clone());
        }
        let cwd = std::env::current_dir().map_err(|source| DocumentReadError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(resolve_against(&self.path, &cwd))
    }
}

fn resolve_against(path: &Path, base: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}
