use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use pxb_core::{Compression, Filter, PixelBuffer, PngOptions, Result};

use crate::error::encode_failure;

/// Encode RGB pixels as an 8-bit, 3-channel PNG with default options
pub fn encode(pixels: &PixelBuffer) -> Result<Vec<u8>> {
    encode_with(pixels, &PngOptions::default())
}

/// Encode RGB pixels as PNG. Output is deterministic for identical input and options.
pub fn encode_with(pixels: &PixelBuffer, options: &PngOptions) -> Result<Vec<u8>> {
    let mut png = Vec::new();

    let encoder = PngEncoder::new_with_quality(
        &mut png,
        compression_type(options.compression),
        filter_type(options.filter),
    );
    encoder
        .write_image(
            pixels.as_bytes(),
            pixels.width(),
            pixels.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(encode_failure)?;

    log::debug!(
        "Encoded {}x{} image to {} PNG bytes",
        pixels.width(),
        pixels.height(),
        png.len()
    );
    Ok(png)
}

fn compression_type(compression: Compression) -> CompressionType {
    match compression {
        Compression::Default => CompressionType::Default,
        Compression::Fast => CompressionType::Fast,
        Compression::Best => CompressionType::Best,
    }
}

fn filter_type(filter: Filter) -> FilterType {
    match filter {
        Filter::None => FilterType::NoFilter,
        Filter::Sub => FilterType::Sub,
        Filter::Up => FilterType::Up,
        Filter::Avg => FilterType::Avg,
        Filter::Paeth => FilterType::Paeth,
        Filter::Adaptive => FilterType::Adaptive,
    }
}
