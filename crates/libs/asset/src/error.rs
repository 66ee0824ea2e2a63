use std::{
    io,
    path::{Path, PathBuf},
};

/// Failure reported by [`FileLoadable::load_from_path`](crate::FileLoadable::load_from_path).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is malformed: {message}", path.display())]
    Format { path: PathBuf, message: String },

    #[error("{} has an unsupported extension, expected one of {expected:?}", path.display())]
    UnsupportedExtension {
        path: PathBuf,
        expected: Vec<String>,
    },
}

impl LoadError {
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }

    pub fn format<S: Into<String>>(path: &Path, message: S) -> Self {
        LoadError::Format {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::Io { path, .. }
            | LoadError::Format { path, .. }
            | LoadError::UnsupportedExtension { path, .. } => path,
        }
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}
