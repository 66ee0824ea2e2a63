use std::{fs::File, io::BufReader, path::Path};

use asset::{check_extension, FileLoadable, LoadError};

use image::{codecs::hdr::HdrDecoder, Rgb};

/// Radiance HDR image as RGBA f32 texels, alpha padded with `0.0`.
///
/// A load replaces width, height and data together. On failure none of
/// them change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HdrTextureSource {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl HdrTextureSource {
    pub const EXTENSIONS: &'static [&'static str] = &["hdr"];

    pub fn texel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?
            .checked_mul(4)?;
        let texel = self.data.get(offset..offset.checked_add(4)?)?;
        Some([texel[0], texel[1], texel[2], texel[3]])
    }
}

impl FileLoadable for HdrTextureSource {
    fn load_from_path(&mut self, path: &Path) -> Result<(), LoadError> {
        check_extension(path, Self::EXTENSIONS)?;
        let (width, height, data) = load_hdr_image(path)?;
        log::debug!("decoded {}x{} hdr image {}", width, height, path.display());

        self.width = width;
        self.height = height;
        self.data = data;
        Ok(())
    }
}

fn load_hdr_image(path: &Path) -> Result<(u32, u32, Vec<f32>), LoadError> {
    let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
    let decoder =
        HdrDecoder::new(BufReader::new(file)).map_err(|e| LoadError::format(path, e.to_string()))?;
    let w = decoder.metadata().width;
    let h = decoder.metadata().height;
    let rgb = decoder
        .read_image_hdr()
        .map_err(|e| LoadError::format(path, e.to_string()))?;
    let mut data = Vec::with_capacity(rgb.len() * 4);
    for Rgb(p) in rgb.iter() {
        data.extend_from_slice(p);
        data.push(0.0);
    }
    Ok((w, h, data))
}
