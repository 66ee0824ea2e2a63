use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
    sync::Arc,
};

use crate::{error::LoadError, loadable::FileLoadable};

/// Raw file contents, shared cheaply between clones.
#[derive(Debug, Clone)]
pub struct BinaryAsset {
    bytes: Arc<[u8]>,
}

impl Default for BinaryAsset {
    fn default() -> Self {
        Self {
            bytes: Arc::from(Vec::new()),
        }
    }
}

impl BinaryAsset {
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for BinaryAsset {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl FileLoadable for BinaryAsset {
    /// Replaces the held bytes. Clones taken before the call keep the old data.
    fn load_from_path(&mut self, path: &Path) -> Result<(), LoadError> {
        let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
        let mut bytes = Vec::new();
        BufReader::new(file)
            .read_to_end(&mut bytes)
            .map_err(|e| LoadError::from_io(path, e))?;

        log::debug!("loaded {} bytes from {}", bytes.len(), path.display());
        self.bytes = bytes.into();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use super::BinaryAsset;
    use crate::loadable::FileLoadable;

    #[test]
    fn earlier_clones_keep_their_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.bin");
        let second = dir.path().join("second.bin");
        fs::write(&first, [1u8, 2, 3]).unwrap();
        fs::write(&second, [9u8]).unwrap();

        let mut asset = BinaryAsset::default();
        assert!(asset.is_empty());
        asset.load_from_path(&first).unwrap();
        let snapshot = asset.clone();
        asset.load_from_path(&second).unwrap();

        assert_eq!(&[1u8, 2, 3], snapshot.bytes());
        assert_eq!(&[9u8], asset.bytes());
    }

    #[test]
    fn failed_load_keeps_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"abc").unwrap();

        let mut asset = BinaryAsset::default();
        asset.load_from_path(&path).unwrap();
        let error = asset
            .load_from_path(Path::new("definitely/not/here.bin"))
            .unwrap_err();

        assert!(error.is_not_found());
        assert_eq!(b"abc", asset.bytes());
    }
}
