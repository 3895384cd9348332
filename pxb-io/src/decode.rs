use std::io::Cursor;

use image::{DynamicImage, ImageReader, Limits};
use pxb_core::{BridgeError, DecodeConfig, DecodeLimits, Dimensions, PixelBuffer, Result};

use crate::error::decode_failure;

/// Decode an encoded image (any format the codec recognizes) into RGB pixels.
///
/// Alpha is dropped and grayscale expanded, so the result always has exactly
/// three channels. Default decode limits apply.
pub fn decode(encoded: &[u8]) -> Result<PixelBuffer> {
    decode_with(encoded, &DecodeConfig::default())
}

/// Decode with explicit decoder configuration
pub fn decode_with(encoded: &[u8], config: &DecodeConfig) -> Result<PixelBuffer> {
    let mut reader = open_reader(encoded)?;
    reader.limits(codec_limits(&config.limits));

    let image = reader.decode().map_err(decode_failure)?;
    to_rgb_pixels(image)
}

pub(crate) fn open_reader(encoded: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>> {
    if encoded.is_empty() {
        return Err(BridgeError::DecodeFailure("empty input".to_string()));
    }

    let reader = ImageReader::new(Cursor::new(encoded))
        .with_guessed_format()
        .map_err(|e| BridgeError::DecodeFailure(e.to_string()))?;

    if reader.format().is_none() {
        return Err(BridgeError::DecodeFailure(
            "unrecognized image format".to_string(),
        ));
    }
    Ok(reader)
}

fn codec_limits(limits: &DecodeLimits) -> Limits {
    let mut codec = Limits::no_limits();
    codec.max_image_width = limits.max_width;
    codec.max_image_height = limits.max_height;
    codec.max_alloc = limits.max_alloc;
    codec
}

fn to_rgb_pixels(image: DynamicImage) -> Result<PixelBuffer> {
    let color = image.color();
    if color.channel_count() != 3 {
        log::warn!(
            "Converting {:?} source with {} channel(s) to RGB",
            color,
            color.channel_count()
        );
    }

    let rgb = image.into_rgb8();
    let dims = Dimensions::new(rgb.width(), rgb.height())?;
    log::debug!("Decoded {}x{} image", dims.width(), dims.height());

    PixelBuffer::new(rgb.into_raw(), dims)
}
