//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure for representing decompressed
//! 4x4 pixel blocks used in DXT/BC texture compression formats.
//!
//! BC formats compress textures by dividing them into 4x4 pixel blocks. After a block is
//! expanded to RGBA it is copied into the destination image with
//! [`Decoded4x4Block::write_to_rgba8`], which clips blocks hanging over the right or
//! bottom edge of images whose dimensions are not multiples of 4.
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```

use crate::color_8888::Color8888;

/// Represents a decoded 4x4 block of BC pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use texconv_common::color_8888::Color8888;
    /// use texconv_common::decoded_4x4_block::Decoded4x4Block;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// let block = Decoded4x4Block::new(pixel);
    /// assert!(block.pixels.iter().all(|&p| p == pixel));
    /// ```
    #[inline]
    pub fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Copies this block into an RGBA8 image at block coordinates `(block_x, block_y)`.
    ///
    /// Pixels falling outside `image_width` x `image_height` are skipped.
    ///
    /// # Parameters
    ///
    /// - `dst`: RGBA8 samples of the whole image, `image_width * image_height * 4` bytes
    /// - `image_width`, `image_height`: Dimensions of the image in pixels
    /// - `block_x`, `block_y`: Position of the block, in blocks
    pub fn write_to_rgba8(
        &self,
        dst: &mut [u8],
        image_width: usize,
        image_height: usize,
        block_x: usize,
        block_y: usize,
    ) {
        let origin_x = block_x * 4;
        let origin_y = block_y * 4;
        let visible_w = image_width.saturating_sub(origin_x).min(4);
        let visible_h = image_height.saturating_sub(origin_y).min(4);

        for y in 0..visible_h {
            let row_start = ((origin_y + y) * image_width + origin_x) * 4;
            let row = &mut dst[row_start..row_start + visible_w * 4];
            for (x, out) in row.chunks_exact_mut(4).enumerate() {
                out.copy_from_slice(&self.pixels[y * 4 + x].to_array());
            }
        }
    }
}
