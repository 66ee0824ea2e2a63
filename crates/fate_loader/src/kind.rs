use std::{fmt, path::Path, str::FromStr};

use asset::{BinaryAsset, FileLoadable, TextAsset, YamlAsset};
use rendering::HdrTextureSource;
use serde::Deserialize;

/// A loadable entity the front-end can also report on.
pub trait LoadedAsset: FileLoadable + Send {
    fn summary(&self) -> String;
}

impl LoadedAsset for TextAsset {
    fn summary(&self) -> String {
        format!(
            "text, {} lines, {} bytes",
            self.lines().count(),
            self.content().len()
        )
    }
}

impl LoadedAsset for BinaryAsset {
    fn summary(&self) -> String {
        format!("binary, {} bytes", self.len())
    }
}

impl LoadedAsset for YamlAsset<serde_yaml::Value> {
    fn summary(&self) -> String {
        match self.get() {
            Some(serde_yaml::Value::Mapping(mapping)) => format!("yaml, {} keys", mapping.len()),
            Some(serde_yaml::Value::Sequence(items)) => format!("yaml, {} items", items.len()),
            Some(_) => "yaml, scalar".to_string(),
            None => "yaml, empty".to_string(),
        }
    }
}

impl LoadedAsset for HdrTextureSource {
    fn summary(&self) -> String {
        format!("hdr image, {}x{}", self.width, self.height)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Text,
    Binary,
    Yaml,
    Hdr,
}

impl AssetKind {
    pub fn from_extension(path: &Path) -> Option<AssetKind> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "txt" | "text" | "md" | "glsl" | "vert" | "frag" => Some(AssetKind::Text),
            "yaml" | "yml" => Some(AssetKind::Yaml),
            "hdr" => Some(AssetKind::Hdr),
            _ => None,
        }
    }

    /// Falls back to raw bytes when the extension says nothing.
    pub fn infer(path: &Path) -> AssetKind {
        Self::from_extension(path).unwrap_or(AssetKind::Binary)
    }

    pub fn create(self) -> Box<dyn LoadedAsset> {
        match self {
            AssetKind::Text => Box::new(TextAsset::default()),
            AssetKind::Binary => Box::new(BinaryAsset::default()),
            AssetKind::Yaml => Box::new(YamlAsset::<serde_yaml::Value>::default()),
            AssetKind::Hdr => Box::new(HdrTextureSource::default()),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AssetKind::Text => "text",
            AssetKind::Binary => "binary",
            AssetKind::Yaml => "yaml",
            AssetKind::Hdr => "hdr",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AssetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(AssetKind::Text),
            "binary" => Ok(AssetKind::Binary),
            "yaml" => Ok(AssetKind::Yaml),
            "hdr" => Ok(AssetKind::Hdr),
            other => Err(format!(
                "unknown asset kind `{}`, expected text, binary, yaml or hdr",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use asset::FileLoadable;

    use super::AssetKind;

    #[test]
    fn infers_from_extension() {
        assert_eq!(AssetKind::Text, AssetKind::infer(Path::new("notes/README.MD")));
        assert_eq!(AssetKind::Yaml, AssetKind::infer(Path::new("config.yml")));
        assert_eq!(AssetKind::Hdr, AssetKind::infer(Path::new("skybox.hdr")));
        assert_eq!(AssetKind::Binary, AssetKind::infer(Path::new("mesh.bin")));
        assert_eq!(AssetKind::Binary, AssetKind::infer(Path::new("LICENSE")));
    }

    #[test]
    fn parses_names() {
        assert_eq!(Ok(AssetKind::Hdr), "HDR".parse());
        assert!("gltf".parse::<AssetKind>().is_err());
        assert_eq!("yaml", AssetKind::Yaml.to_string());
    }

    #[test]
    fn created_entities_load_and_summarise() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join("greeting.txt");
        let yaml = dir.path().join("scene.yaml");
        fs::write(&text, "hello\nworld\n").unwrap();
        fs::write(&yaml, "name: helmet\nscale: 2\n").unwrap();

        let mut asset = AssetKind::Text.create();
        asset.load_from_path(&text).unwrap();
        assert_eq!("text, 2 lines, 12 bytes", asset.summary());

        let mut asset = AssetKind::Binary.create();
        asset.load_from_path(&text).unwrap();
        assert_eq!("binary, 12 bytes", asset.summary());

        let mut asset = AssetKind::Yaml.create();
        assert_eq!("yaml, empty", asset.summary());
        asset.load_from_path(&yaml).unwrap();
        assert_eq!("yaml, 2 keys", asset.summary());
    }
}
