use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use texconv_common::{Channels, PixelBuffer};
use texconv_file_formats_api::handlers::{DdsHandler, HdrHandler, StandardHandler};
use texconv_file_formats_api::*;

struct Dirs {
    _root: TempDir,
    input: PathBuf,
    output: PathBuf,
}

fn dirs() -> Dirs {
    let root = tempdir().unwrap();
    let input = root.path().join("input");
    let output = root.path().join("output");
    fs::create_dir(&input).unwrap();
    Dirs {
        _root: root,
        input,
        output,
    }
}

fn config(dirs: &Dirs, operation: Operation, flip: bool) -> BatchConfig {
    BatchConfig {
        input_dir: dirs.input.clone(),
        output_dir: dirs.output.clone(),
        operation,
        flip,
    }
}

fn ldr(width: u32, height: u32, channels: Channels) -> DecodedImage {
    let len = PixelBuffer::<u8>::required_samples(width, height, channels).unwrap();
    let samples = (0..len).map(|x| (x * 29 % 256) as u8).collect();
    DecodedImage::Ldr(PixelBuffer::new(width, height, channels, samples).unwrap())
}

/// Radiance values that survive an RGBE round trip unchanged.
fn radiance(width: u32, height: u32) -> DecodedImage {
    const VALUES: [f32; 6] = [0.25, 0.5, 1.0, 2.0, 3.0, 10.0];
    let len = PixelBuffer::<f32>::required_samples(width, height, Channels::Rgb).unwrap();
    let samples = (0..len).map(|x| VALUES[(x * 5 + x / 3) % VALUES.len()]).collect();
    DecodedImage::Hdr(PixelBuffer::new(width, height, Channels::Rgb, samples).unwrap())
}

fn write(dir: &Path, name: &str, handler: &dyn FormatHandler, image: &DecodedImage) {
    fs::write(dir.join(name), handler.encode(image).unwrap()).unwrap();
}

fn read(path: &Path, handler: &dyn FormatHandler) -> DecodedImage {
    handler.decode(&fs::read(path).unwrap()).unwrap()
}

fn flipped(image: &DecodedImage) -> DecodedImage {
    let mut image = image.clone();
    image.flip_vertical();
    image
}

fn names(paths: impl IntoIterator<Item = PathBuf>) -> Vec<String> {
    paths
        .into_iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn convert_handles_mixed_directory() {
    let dirs = dirs();
    write(&dirs.input, "b_tex.dds", &DdsHandler, &ldr(4, 4, Channels::Rgba));
    write(&dirs.input, "a_sky.hdr", &HdrHandler, &radiance(3, 2));
    let png = StandardHandler::for_format(StandardFormat::Png);
    write(&dirs.input, "photo.png", png, &ldr(2, 2, Channels::Rgb));
    fs::write(dirs.input.join("readme.txt"), "ignored").unwrap();
    fs::write(dirs.input.join("c_broken.dds"), b"DDS not really").unwrap();
    fs::create_dir(dirs.input.join("nested")).unwrap();
    write(&dirs.input.join("nested"), "deep.dds", &DdsHandler, &ldr(4, 4, Channels::Rgba));

    let report = run_batch(&config(&dirs, Operation::Convert, false)).unwrap();

    assert_eq!(
        names(report.converted.iter().map(|r| r.input.clone())),
        ["a_sky.hdr", "b_tex.dds"]
    );
    assert_eq!(
        names(report.converted.iter().flat_map(|r| r.outputs.clone())),
        ["a_sky.png", "b_tex.tga"]
    );
    assert_eq!(names(report.failed.iter().map(|f| f.input.clone())), ["c_broken.dds"]);
    assert!(matches!(report.failed[0].error, ConvertError::Dds(_)));
    assert!(!report.is_success());

    let mut written = names(fs::read_dir(&dirs.output).unwrap().map(|e| e.unwrap().path()));
    written.sort();
    assert_eq!(written, ["a_sky.png", "b_tex.tga"]);
}

#[test]
fn hdr_flip_is_lossless() {
    let dirs = dirs();
    let image = radiance(5, 4);
    write(&dirs.input, "sky.hdr", &HdrHandler, &image);

    let report = run_batch(&config(&dirs, Operation::Flip, false)).unwrap();
    assert!(report.is_success());

    let output = dirs.output.join("sky.hdr");
    assert_eq!(report.converted[0].outputs, [output.clone()]);
    assert_eq!(read(&output, &HdrHandler), flipped(&image));
}

#[rstest]
#[case("tex.dds")]
#[case("photo.tga")]
#[case("photo.png")]
#[case("photo.bmp")]
fn flip_twice_restores_image(#[case] name: &str) {
    let format = SourceFormat::from_path(Path::new(name)).unwrap();
    let handler = format.handler();
    let channels = match format {
        SourceFormat::Other(StandardFormat::Bmp) => Channels::Rgb,
        _ => Channels::Rgba,
    };
    let image = ldr(6, 5, channels);

    let dirs = dirs();
    write(&dirs.input, name, handler, &image);
    run_batch(&config(&dirs, Operation::Flip, false)).unwrap();
    assert_eq!(read(&dirs.output.join(name), handler), flipped(&image));

    let second = BatchConfig {
        input_dir: dirs.output.clone(),
        output_dir: dirs.output.join("again"),
        operation: Operation::Flip,
        flip: false,
    };
    run_batch(&second).unwrap();
    assert_eq!(read(&second.output_dir.join(name), handler), image);
}

#[test]
fn tone_map_writes_matching_tga_and_png() {
    let dirs = dirs();
    let image = radiance(4, 3);
    write(&dirs.input, "sky.hdr", &HdrHandler, &image);
    write(&dirs.input, "tex.dds", &DdsHandler, &ldr(4, 4, Channels::Rgba));

    let report = run_batch(&config(&dirs, Operation::ToneMap, true)).unwrap();
    assert_eq!(report.total_files(), 1);

    let tga = read(&dirs.output.join("sky.tga"), StandardHandler::for_format(StandardFormat::Tga));
    let png = read(&dirs.output.join("sky.png"), StandardHandler::for_format(StandardFormat::Png));
    assert_eq!(tga, png);

    let expected = DecodedImage::Ldr(flipped(&image).into_ldr());
    assert_eq!(tga, expected);
}

#[test]
fn dds_to_tga_accepts_uppercase_extension() {
    let dirs = dirs();
    let image = ldr(8, 4, Channels::Rgba);
    write(&dirs.input, "TEX.DDS", &DdsHandler, &image);

    let report = run_batch(&config(&dirs, Operation::DdsToTga, false)).unwrap();
    assert_eq!(names(report.converted[0].outputs.clone()), ["TEX.tga"]);
    assert_eq!(
        read(&dirs.output.join("TEX.tga"), StandardHandler::for_format(StandardFormat::Tga)),
        image
    );
}

#[test]
fn all_black_hdr_maps_to_zero() {
    let dirs = dirs();
    let black = PixelBuffer::filled(2, 2, Channels::Rgb, 0.0f32).unwrap();
    write(&dirs.input, "black.hdr", &HdrHandler, &DecodedImage::Hdr(black));

    let report = run_batch(&config(&dirs, Operation::ToneMap, false)).unwrap();
    assert!(report.is_success());

    let png_handler = StandardHandler::for_format(StandardFormat::Png);
    let png = read(&dirs.output.join("black.png"), png_handler);
    assert!(png.into_ldr().samples().iter().all(|&s| s == 0));
}

#[test]
fn empty_file_is_recorded_as_failure() {
    let dirs = dirs();
    fs::write(dirs.input.join("empty.hdr"), b"").unwrap();

    let report = run_batch(&config(&dirs, Operation::ToneMap, false)).unwrap();
    assert!(matches!(report.failed[0].error, ConvertError::EmptyFile));
    assert!(report.converted.is_empty());
}

#[test]
fn callback_sees_every_candidate() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let dirs = dirs();
    for i in 0..4 {
        write(&dirs.input, &format!("{i}.dds"), &DdsHandler, &ldr(4, 4, Channels::Rgba));
    }
    fs::write(dirs.input.join("bad.dds"), [0u8; 3]).unwrap();

    let seen = AtomicUsize::new(0);
    let report = run_batch_with(&config(&dirs, Operation::DdsToTga, false), &|_| {
        seen.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap();

    assert_eq!(seen.load(Ordering::Relaxed), 5);
    assert_eq!(report.converted.len(), 4);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.bytes_processed(), 4 * (128 + 4 * 4 * 4));
}

#[test]
fn missing_input_directory_is_fatal() {
    let root = tempdir().unwrap();
    let config = BatchConfig {
        input_dir: root.path().join("nope"),
        output_dir: root.path().join("out"),
        operation: Operation::DdsToTga,
        flip: false,
    };

    assert!(matches!(run_batch(&config), Err(BatchError::InputDirectoryMissing(_))));
}
