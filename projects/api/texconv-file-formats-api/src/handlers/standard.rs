//! TGA, PNG and BMP through the `image` codecs.

use super::FormatHandler;
use crate::decoded::DecodedImage;
use crate::error::ConvertResult;
use crate::format::StandardFormat;
use std::io::Cursor;

/// Handler for an 8-bit standard container.
///
/// Radiance inputs are tone mapped before encoding; 16-bit sources decode to 8-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardHandler {
    format: StandardFormat,
}

impl StandardHandler {
    pub const fn new(format: StandardFormat) -> Self {
        Self { format }
    }
}

impl FormatHandler for StandardHandler {
    fn decode(&self, data: &[u8]) -> ConvertResult<DecodedImage> {
        let image = image::load_from_memory_with_format(data, self.format.image_format())?;
        DecodedImage::from_dynamic(image)
    }

    fn encode(&self, image: &DecodedImage) -> ConvertResult<Vec<u8>> {
        let image = image.clone().into_dynamic_ldr()?;
        let mut output = Cursor::new(Vec::new());
        image.write_to(&mut output, self.format.image_format())?;
        Ok(output.into_inner())
    }

    fn output_extension(&self) -> &'static str {
        self.format.extension()
    }
}
