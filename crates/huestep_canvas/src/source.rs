//! Background photo references and decoding.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::ImageLoadError;

/// Where a collected color's photo lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageSource {
    /// A file on disk.
    Path(PathBuf),
    /// Encoded image bytes held in memory.
    Bytes(Vec<u8>),
}

impl ImageSource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }

    /// Short description for logs; never dumps raw bytes.
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }

    /// Read and decode the photo into RGBA8.
    ///
    /// This is the single await point of a render: it either yields the full
    /// image or fails once, with no retry.
    pub fn load(&self) -> Result<RgbaImage, ImageLoadError> {
        let decoded = match self {
            ImageSource::Path(path) => {
                let bytes = std::fs::read(path).map_err(|source| ImageLoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                image::load_from_memory(&bytes)?
            }
            ImageSource::Bytes(bytes) => image::load_from_memory(bytes)?,
        };

        let rgba = decoded.to_rgba8();
        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(ImageLoadError::Empty);
        }
        log::debug!(
            "Loaded image {} ({}x{})",
            self.describe(),
            rgba.width(),
            rgba.height()
        );
        Ok(rgba)
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_load_from_bytes() {
        let source = ImageSource::Bytes(png_bytes(4, 3));
        let img = source.load().unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let source = ImageSource::Bytes(vec![1, 2, 3, 4]);
        assert!(matches!(source.load(), Err(ImageLoadError::Decode(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = ImageSource::from_path("/definitely/not/here.png");
        match source.load() {
            Err(ImageLoadError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.png"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_describe_hides_bytes() {
        assert_eq!(ImageSource::Bytes(vec![0; 12]).describe(), "<12 bytes>");
    }
}
