// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster image: decodes JPEG/PNG sources with the `image` crate and keeps
// RGB8 pixels plus the natural pixel size used for fitting.

use folio_core::ImageSource;
use folio_core::error::{FolioError, Result};
use image::DynamicImage;
use tracing::{debug, instrument};

/// A decoded image ready to be embedded in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    /// Row-major RGB8 pixel data.
    rgb: Vec<u8>,
}

impl RasterImage {
    // -- Construction ---------------------------------------------------------

    /// Decode an image source (path or in-memory bytes).
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn load(source: &ImageSource) -> Result<Self> {
        let data = source.bytes()?;
        Self::from_bytes(&data)
    }

    /// Decode raw encoded bytes (JPEG, PNG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)
            .map_err(|err| FolioError::Image(format!("failed to decode image: {}", err)))?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Self::from_dynamic(img)
    }

    /// Wrap an already-decoded `DynamicImage`. Images with a zero dimension
    /// have no aspect ratio and are rejected.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(FolioError::Image(format!(
                "image has no area ({}x{})",
                image.width(),
                image.height()
            )));
        }
        let rgb = image.to_rgb8();
        Ok(Self {
            width: rgb.width(),
            height: rgb.height(),
            rgb: rgb.into_raw(),
        })
    }

    // -- Accessors ------------------------------------------------------------

    /// Natural width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Natural height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Height divided by width.
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width as f32
    }

    /// Borrow the RGB8 pixel buffer.
    pub fn pixels(&self) -> &[u8] {
        &self.rgb
    }

    /// Consume the image and return the pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.rgb
    }
}

/// Encode a solid-colour PNG in memory. Shared by the crate's tests.
#[cfg(test)]
pub(crate) fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([40, 90, 160]));
    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
        .expect("PNG encoding of a fixture cannot fail");
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn decodes_png_bytes() {
        let raster = RasterImage::from_bytes(&png_fixture(20, 10)).unwrap();
        assert_eq!(raster.width(), 20);
        assert_eq!(raster.height(), 10);
        assert!((raster.aspect() - 0.5).abs() < f32::EPSILON);
        assert_eq!(raster.pixels().len(), 20 * 10 * 3);
        assert_eq!(&raster.pixels()[..3], &[40, 90, 160]);
    }

    #[test]
    fn rgba_is_flattened_to_rgb() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));
        let raster = RasterImage::from_dynamic(img).unwrap();
        assert_eq!(raster.into_pixels().len(), 4 * 4 * 3);
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        let err = RasterImage::from_bytes(b"not an image").unwrap_err();
        assert!(matches!(err, FolioError::Image(_)));
    }

    #[test]
    fn zero_sized_image_is_rejected() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(0, 5));
        assert!(RasterImage::from_dynamic(img).is_err());
    }

    #[test]
    fn loads_from_source_bytes() {
        let source = ImageSource::Bytes(png_fixture(3, 9));
        let raster = RasterImage::load(&source).unwrap();
        assert_eq!((raster.width(), raster.height()), (3, 9));
    }
}
