use pxb_core::{CHANNELS, ImageInfo, Result};

use crate::decode::open_reader;
use crate::error::decode_failure;

/// Read the dimensions of an encoded image from its header, without decoding pixels.
///
/// `channels` is what [`crate::decode()`] produces, not the source's native count.
pub fn probe(encoded: &[u8]) -> Result<ImageInfo> {
    let reader = open_reader(encoded)?;
    let (width, height) = reader.into_dimensions().map_err(decode_failure)?;

    Ok(ImageInfo {
        width,
        height,
        channels: CHANNELS as u8,
    })
}
