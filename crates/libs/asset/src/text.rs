use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use crate::{error::LoadError, loadable::FileLoadable};

/// UTF-8 text read from any file.
///
/// A successful load replaces both the content and the recorded source
/// path. A failed load leaves the previous content untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAsset {
    content: String,
    path: Option<PathBuf>,
}

impl TextAsset {
    pub fn from_content<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            path: None,
        }
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Path of the last successful load.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the content came from a file. Assets built with
    /// [`TextAsset::from_content`] report `false` until their first load.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.path.is_some()
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.content.lines()
    }
}

impl AsRef<str> for TextAsset {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

impl FileLoadable for TextAsset {
    fn load_from_path(&mut self, path: &Path) -> Result<(), LoadError> {
        let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
        let mut bytes = Vec::new();
        BufReader::new(file)
            .read_to_end(&mut bytes)
            .map_err(|e| LoadError::from_io(path, e))?;

        let content = String::from_utf8(bytes)
            .map_err(|e| LoadError::format(path, format!("invalid utf-8: {}", e.utf8_error())))?;

        log::debug!("loaded {} bytes of text from {}", content.len(), path.display());
        self.content = content;
        self.path = Some(path.to_path_buf());
        Ok(())
    }
}
