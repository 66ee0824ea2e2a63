use std::{fs::File, io::BufReader, path::Path};

use serde::de::DeserializeOwned;

use crate::{
    error::LoadError,
    loadable::{check_extension, FileLoadable},
};

/// A typed YAML document. Only `.yaml` and `.yml` paths are accepted.
///
/// Each successful load replaces the whole value; nothing is merged.
#[derive(Debug, Clone)]
pub struct YamlAsset<T> {
    value: Option<T>,
}

impl<T> Default for YamlAsset<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> YamlAsset<T> {
    pub const EXTENSIONS: &'static [&'static str] = &["yaml", "yml"];

    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.value.is_some()
    }

    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T: DeserializeOwned> FileLoadable for YamlAsset<T> {
    fn load_from_path(&mut self, path: &Path) -> Result<(), LoadError> {
        check_extension(path, Self::EXTENSIONS)?;
        let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
        let value: T = serde_yaml::from_reader(BufReader::new(file))
            .map_err(|e| LoadError::format(path, e.to_string()))?;

        log::debug!("parsed yaml document {}", path.display());
        self.value = Some(value);
        Ok(())
    }
}
