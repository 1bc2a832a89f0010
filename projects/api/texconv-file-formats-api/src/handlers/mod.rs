//! Decode/encode pairs bound to each [`SourceFormat`].
//!
//! | Tag | Decode | Encode | Output extension |
//! |-----|--------|--------|------------------|
//! | [`SourceFormat::Dds`] | in-house DDS decoder | uncompressed RGBA8888 DDS | `dds` |
//! | [`SourceFormat::Hdr`] | Radiance RGBE | Radiance RGBE | `hdr` |
//! | [`SourceFormat::Other`] | `image` codec | `image` codec | same as input |

pub mod dds;
pub mod hdr;
pub mod standard;

use crate::decoded::DecodedImage;
use crate::error::ConvertResult;
use crate::format::{SourceFormat, StandardFormat};

pub use dds::DdsHandler;
pub use hdr::HdrHandler;
pub use standard::StandardHandler;

/// A codec for one source format.
pub trait FormatHandler: Send + Sync {
    /// Decodes a complete file held in memory.
    fn decode(&self, data: &[u8]) -> ConvertResult<DecodedImage>;

    /// Encodes `image` into a complete file.
    fn encode(&self, image: &DecodedImage) -> ConvertResult<Vec<u8>>;

    /// Extension of files produced by [`FormatHandler::encode`], without the dot.
    fn output_extension(&self) -> &'static str;
}

static DDS: DdsHandler = DdsHandler;
static HDR: HdrHandler = HdrHandler;
static TGA: StandardHandler = StandardHandler::new(StandardFormat::Tga);
static PNG: StandardHandler = StandardHandler::new(StandardFormat::Png);
static BMP: StandardHandler = StandardHandler::new(StandardFormat::Bmp);

impl SourceFormat {
    /// Returns the handler that decodes and re-encodes this format.
    pub fn handler(self) -> &'static dyn FormatHandler {
        match self {
            SourceFormat::Dds => &DDS,
            SourceFormat::Hdr => &HDR,
            SourceFormat::Other(format) => StandardHandler::for_format(format),
        }
    }
}

impl StandardHandler {
    /// Returns the shared handler for `format`.
    pub fn for_format(format: StandardFormat) -> &'static StandardHandler {
        match format {
            StandardFormat::Tga => &TGA,
            StandardFormat::Png => &PNG,
            StandardFormat::Bmp => &BMP,
        }
    }
}
