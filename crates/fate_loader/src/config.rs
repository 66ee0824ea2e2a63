use std::path::{Path, PathBuf};

use asset::{FileLoadable, LoadError, YamlAsset};
use serde::Deserialize;

use crate::kind::AssetKind;

/// Front-end settings read from a YAML file. Command line flags win over these.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    log_level: Option<String>,
    kind: Option<AssetKind>,
    background: bool,
    paths: Vec<PathBuf>,
}

impl Config {
    const DEFAULT_LOG_LEVEL: &'static str = "info";

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(Self::DEFAULT_LOG_LEVEL)
    }

    pub fn kind(&self) -> Option<AssetKind> {
        self.kind
    }

    pub fn background(&self) -> bool {
        self.background
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl FileLoadable for Config {
    /// Replaces every field; keys missing from the file fall back to defaults.
    fn load_from_path(&mut self, path: &Path) -> Result<(), LoadError> {
        let mut document = YamlAsset::<Config>::default();
        document.load_from_path(path)?;
        if let Some(config) = document.into_inner() {
            *self = config;
        }
        Ok(())
    }
}
