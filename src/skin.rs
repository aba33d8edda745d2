//! Validated skin images

use image::{DynamicImage, GenericImageView, RgbaImage, SubImage};

use crate::error::SkinmashError;
use crate::region::Rect;

/// Width of every skin, in pixels.
pub const SKIN_WIDTH: u32 = 64;
/// Height of a full-layout skin.
pub const FULL_HEIGHT: u32 = 64;
/// Height of a legacy-layout skin.
pub const LEGACY_HEIGHT: u32 = 32;

/// Skin texture layout, determined by image height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// 64x32 layout without left limbs or overlay layers
    Legacy,
    /// 64x64 layout with every region
    Full,
}

/// A decoded skin with known layout. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SkinImage {
    pixels: RgbaImage,
    layout: Layout,
}

impl SkinImage {
    /// Wrap an RGBA image, checking it has skin dimensions.
    pub fn new(pixels: RgbaImage) -> Result<Self, SkinmashError> {
        let (width, height) = pixels.dimensions();
        let layout = match (width, height) {
            (SKIN_WIDTH, FULL_HEIGHT) => Layout::Full,
            (SKIN_WIDTH, LEGACY_HEIGHT) => Layout::Legacy,
            _ => return Err(SkinmashError::InvalidSkinDimensions { width, height }),
        };
        Ok(Self { pixels, layout })
    }

    /// Convert any decoded image to RGBA and validate it.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self, SkinmashError> {
        Self::new(image.into_rgba8())
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_legacy(&self) -> bool {
        self.layout == Layout::Legacy
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// View of the pixels inside `rect`, clipped to the image bounds.
    pub fn portion(&self, rect: Rect) -> SubImage<&RgbaImage> {
        let (width, height) = self.pixels.dimensions();
        let col = rect.col.min(width);
        let row = rect.row.min(height);
        let w = rect.width.min(width - col);
        let h = rect.height.min(height - row);
        self.pixels.view(col, row, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_full_layout() {
        let skin = SkinImage::new(RgbaImage::new(64, 64)).unwrap();
        assert_eq!(skin.layout(), Layout::Full);
        assert!(!skin.is_legacy());
    }

    #[test]
    fn test_legacy_layout() {
        let skin = SkinImage::new(RgbaImage::new(64, 32)).unwrap();
        assert_eq!(skin.layout(), Layout::Legacy);
        assert!(skin.is_legacy());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        for (w, h) in [(32, 32), (64, 48), (128, 128), (63, 64), (64, 65)] {
            match SkinImage::new(RgbaImage::new(w, h)) {
                Err(SkinmashError::InvalidSkinDimensions { width, height }) => {
                    assert_eq!((width, height), (w, h));
                }
                other => panic!("expected InvalidSkinDimensions for {}x{}, got {:?}", w, h, other),
            }
        }
    }

    #[test]
    fn test_from_dynamic_converts_rgb() {
        let rgb = image::RgbImage::from_pixel(64, 32, image::Rgb([1, 2, 3]));
        let skin = SkinImage::from_dynamic(DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(*skin.pixels().get_pixel(0, 0), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_portion_reads_rect() {
        let mut pixels = RgbaImage::new(64, 64);
        pixels.put_pixel(9, 8, Rgba([10, 20, 30, 255]));
        let skin = SkinImage::new(pixels).unwrap();

        let view = skin.portion(Rect::new(8, 8, 8, 8));
        assert_eq!(view.dimensions(), (8, 8));
        assert_eq!(view.get_pixel(1, 0), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_portion_clipped_to_bounds() {
        let skin = SkinImage::new(RgbaImage::new(64, 32)).unwrap();
        let view = skin.portion(Rect::new(16, 0, 48, 64));
        assert_eq!(view.dimensions(), (64, 16));
    }
}
