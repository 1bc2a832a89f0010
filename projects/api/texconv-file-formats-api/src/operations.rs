//! Single-file conversions.
//!
//! Every operation reads its input through a read-only mapping, decodes it with the handler
//! for its [`SourceFormat`], optionally flips it and writes one or more outputs into
//! `output_dir`. Output names are the input base name with a lowercase extension.

use crate::decoded::DecodedImage;
use crate::error::{ConvertError, ConvertResult};
use crate::file_io::{with_mapped_file, write_file};
use crate::format::{SourceFormat, StandardFormat};
use crate::handlers::{FormatHandler, StandardHandler};
use crate::record::ConversionRecord;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Converts a `.dds` file to `<base>.tga`.
pub fn dds_to_tga(
    input: &Path,
    output_dir: &Path,
    flip: bool,
) -> ConvertResult<ConversionRecord> {
    expect_format(input, SourceFormat::Dds)?;
    let (image, input_len) = read_image(input, SourceFormat::Dds, flip)?;
    let tga = StandardHandler::for_format(StandardFormat::Tga);
    let output = write_image(&image, tga, output_path(input, output_dir, tga.output_extension()))?;

    Ok(ConversionRecord {
        input: input.to_path_buf(),
        outputs: vec![output],
        input_len,
    })
}

/// Tone maps a `.hdr` file and writes it as both `<base>.tga` and `<base>.png`.
///
/// Both outputs are encoded from the same 8-bit buffer, and neither is written unless both
/// encode.
pub fn tone_map_file(
    input: &Path,
    output_dir: &Path,
    flip: bool,
) -> ConvertResult<ConversionRecord> {
    expect_format(input, SourceFormat::Hdr)?;
    let (image, input_len) = read_image(input, SourceFormat::Hdr, flip)?;
    let image = DecodedImage::Ldr(image.into_ldr());

    let targets = [StandardFormat::Tga, StandardFormat::Png].map(|format| {
        let handler: &dyn FormatHandler = StandardHandler::for_format(format);
        (handler, output_path(input, output_dir, handler.output_extension()))
    });
    let outputs = write_images(&image, &targets)?;

    Ok(ConversionRecord {
        input: input.to_path_buf(),
        outputs,
        input_len,
    })
}

/// Flips a file vertically and writes it back in the container it came from.
///
/// `.dds` files are written as uncompressed RGBA8888 `<base>.dds`, `.hdr` files as
/// `<base>.hdr` and standard containers under their original file name.
pub fn flip_file(input: &Path, output_dir: &Path) -> ConvertResult<ConversionRecord> {
    let format = source_format(input)?;
    let (image, input_len) = read_image(input, format, true)?;

    let handler = format.handler();
    let path = match format {
        SourceFormat::Other(_) => output_dir.join(input.file_name().unwrap_or_default()),
        SourceFormat::Dds | SourceFormat::Hdr => {
            output_path(input, output_dir, handler.output_extension())
        }
    };
    let output = write_image(&image, handler, path)?;

    Ok(ConversionRecord {
        input: input.to_path_buf(),
        outputs: vec![output],
        input_len,
    })
}

/// Converts `.dds` to `<base>.tga` and `.hdr` to a tone mapped `<base>.png`.
pub fn convert_file(
    input: &Path,
    output_dir: &Path,
    flip: bool,
) -> ConvertResult<ConversionRecord> {
    match source_format(input)? {
        SourceFormat::Dds => dds_to_tga(input, output_dir, flip),
        SourceFormat::Hdr => {
            let (image, input_len) = read_image(input, SourceFormat::Hdr, flip)?;
            let png = StandardHandler::for_format(StandardFormat::Png);
            let path = output_path(input, output_dir, png.output_extension());
            let output = write_image(&image, png, path)?;

            Ok(ConversionRecord {
                input: input.to_path_buf(),
                outputs: vec![output],
                input_len,
            })
        }
        SourceFormat::Other(format) => {
            Err(ConvertError::UnsupportedExtension(format.extension().to_owned()))
        }
    }
}

/// `<output_dir>/<input stem>.<extension>`.
///
/// Only the last extension is replaced, so `a.b.dds` becomes `a.b.tga`.
pub fn output_path(input: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(".");
    name.push(extension.to_ascii_lowercase());
    output_dir.join(name)
}

fn source_format(input: &Path) -> ConvertResult<SourceFormat> {
    SourceFormat::from_path(input).ok_or_else(|| {
        let extension = input.extension().unwrap_or_default();
        ConvertError::UnsupportedExtension(extension.to_string_lossy().into_owned())
    })
}

fn expect_format(input: &Path, expected: SourceFormat) -> ConvertResult<()> {
    match source_format(input)? {
        format if format == expected => Ok(()),
        _ => {
            let extension = input.extension().unwrap_or_default();
            Err(ConvertError::UnsupportedExtension(
                extension.to_string_lossy().into_owned(),
            ))
        }
    }
}

fn read_image(
    input: &Path,
    format: SourceFormat,
    flip: bool,
) -> ConvertResult<(DecodedImage, u64)> {
    let (mut image, input_len) = with_mapped_file(input, |data| format.handler().decode(data))?;
    if flip {
        image.flip_vertical();
    }
    Ok((image, input_len))
}

fn write_image(
    image: &DecodedImage,
    handler: &dyn FormatHandler,
    path: PathBuf,
) -> ConvertResult<PathBuf> {
    let encoded = handler.encode(image)?;
    write_file(&path, &encoded)?;
    log::debug!("Wrote {} ({} bytes)", path.display(), encoded.len());
    Ok(path)
}

/// Writes `image` once per target. Every target is encoded before the first file is written,
/// and files already written are removed again if a later write fails.
fn write_images(
    image: &DecodedImage,
    targets: &[(&dyn FormatHandler, PathBuf)],
) -> ConvertResult<Vec<PathBuf>> {
    let encoded = targets
        .iter()
        .map(|(handler, _)| handler.encode(image))
        .collect::<ConvertResult<Vec<_>>>()?;

    let mut outputs = Vec::with_capacity(targets.len());
    for ((_, path), data) in targets.iter().zip(encoded) {
        if let Err(e) = write_file(path, &data) {
            for written in &outputs {
                // Best effort.
                let _ = std::fs::remove_file(written);
            }
            return Err(e);
        }
        log::debug!("Wrote {} ({} bytes)", path.display(), data.len());
        outputs.push(path.clone());
    }
    Ok(outputs)
}
