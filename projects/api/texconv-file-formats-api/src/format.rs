//! Source format tags derived from file extensions.

use std::path::Path;

/// Standard raster containers handled by the `image` codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFormat {
    Tga,
    Png,
    Bmp,
}

impl StandardFormat {
    /// Lowercase file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            StandardFormat::Tga => "tga",
            StandardFormat::Png => "png",
            StandardFormat::Bmp => "bmp",
        }
    }

    /// The matching `image` codec.
    pub fn image_format(self) -> image::ImageFormat {
        match self {
            StandardFormat::Tga => image::ImageFormat::Tga,
            StandardFormat::Png => image::ImageFormat::Png,
            StandardFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// Which decoder/encoder pair applies to a file.
///
/// Derived from the file extension only, never from the contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// DirectDraw Surface (`.dds`)
    Dds,
    /// Radiance RGBE (`.hdr`)
    Hdr,
    /// A standard 8-bit container (`.tga`, `.png`, `.bmp`)
    Other(StandardFormat),
}

impl SourceFormat {
    /// Tags a file by its extension, ignoring ASCII case.
    ///
    /// Returns [`None`] for files without an extension or with an unknown one.
    ///
    /// ```
    /// use std::path::Path;
    /// use texconv_file_formats_api::format::{SourceFormat, StandardFormat};
    ///
    /// assert_eq!(SourceFormat::from_path(Path::new("sky.HDR")), Some(SourceFormat::Hdr));
    /// assert_eq!(
    ///     SourceFormat::from_path(Path::new("a.png")),
    ///     Some(SourceFormat::Other(StandardFormat::Png))
    /// );
    /// assert_eq!(SourceFormat::from_path(Path::new("notes.txt")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_extension(path.extension()?.to_str()?)
    }

    /// Tags an extension (without the dot), ignoring ASCII case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        match extension.as_str() {
            "dds" => Some(SourceFormat::Dds),
            "hdr" => Some(SourceFormat::Hdr),
            "tga" => Some(SourceFormat::Other(StandardFormat::Tga)),
            "png" => Some(SourceFormat::Other(StandardFormat::Png)),
            "bmp" => Some(SourceFormat::Other(StandardFormat::Bmp)),
            _ => None,
        }
    }
}
