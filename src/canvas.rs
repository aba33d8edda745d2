//! Output canvas the commands are composited into

use image::{imageops, GenericImageView, RgbaImage};

use crate::command::Command;
use crate::region::Rect;
use crate::skin::{SkinImage, FULL_HEIGHT, SKIN_WIDTH};

/// A 64x64 RGBA skin being assembled, initially fully transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self { image: RgbaImage::new(SKIN_WIDTH, FULL_HEIGHT) }
    }

    /// Apply a resolved command.
    pub fn apply(&mut self, command: &Command) {
        self.copy_block(&command.skin, command.source, command.dest);
    }

    /// Copy the pixels at `source` in `skin` to the origin of `dest`.
    ///
    /// Pixels are replaced, not blended. The copied block is clipped to the
    /// smaller of the two rectangles, so a 64x32 source only fills the top
    /// half of a 64x64 destination.
    pub fn copy_block(&mut self, skin: &SkinImage, source: Rect, dest: Rect) {
        let block = skin.portion(source);
        let width = block.width().min(dest.width);
        let height = block.height().min(dest.height);
        let block = block.view(0, 0, width, height);
        imageops::replace(&mut self.image, &*block, i64::from(dest.col), i64::from(dest.row));
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Check if every pixel is still fully transparent black.
    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p.0 == [0, 0, 0, 0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::lookup;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn filled(width: u32, height: u32, color: Rgba<u8>) -> SkinImage {
        SkinImage::new(RgbaImage::from_pixel(width, height, color)).unwrap()
    }

    fn count(canvas: &Canvas, color: Rgba<u8>) -> usize {
        canvas.image().pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn test_new_canvas_blank() {
        let canvas = Canvas::new();
        assert_eq!(canvas.image().dimensions(), (64, 64));
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_copy_block_same_rect() {
        let mut canvas = Canvas::new();
        let head = lookup("head").unwrap().rect;
        canvas.copy_block(&filled(64, 64, RED), head, head);

        assert_eq!(count(&canvas, RED), 16 * 32);
        assert_eq!(*canvas.image().get_pixel(0, 0), RED);
        assert_eq!(*canvas.image().get_pixel(31, 15), RED);
        assert_eq!(canvas.image().get_pixel(32, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_copy_block_reads_source_location() {
        let mut pixels = RgbaImage::new(64, 32);
        // mark the top-left pixel of rleg
        pixels.put_pixel(0, 16, BLUE);
        let skin = SkinImage::new(pixels).unwrap();

        let mut canvas = Canvas::new();
        canvas.copy_block(&skin, lookup("rleg").unwrap().rect, lookup("lleg").unwrap().rect);

        // lleg starts at row 48, col 16
        assert_eq!(*canvas.image().get_pixel(16, 48), BLUE);
        assert_eq!(canvas.image().get_pixel(0, 16).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_copy_block_replaces_not_blends() {
        let mut canvas = Canvas::new();
        let rect = lookup("body").unwrap().rect;
        canvas.copy_block(&filled(64, 64, RED), rect, rect);
        canvas.copy_block(&filled(64, 64, Rgba([0, 0, 0, 0])), rect, rect);
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_copy_legacy_whole_skin_fills_top_half() {
        let mut canvas = Canvas::new();
        canvas.copy_block(
            &filled(64, 32, RED),
            lookup("all32").unwrap().rect,
            lookup("all").unwrap().rect,
        );

        assert_eq!(count(&canvas, RED), 64 * 32);
        assert_eq!(*canvas.image().get_pixel(63, 31), RED);
        assert_eq!(canvas.image().get_pixel(0, 32).0, [0, 0, 0, 0]);
    }
}
