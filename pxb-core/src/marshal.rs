//! Conversion between host numeric values and 8-bit channel values
//!
//! Host environments hand numbers over as either integers or doubles. Channel
//! values are narrowed by truncating toward zero and then saturating to
//! `0..=255`; NaN becomes 0. Dimensions are narrowed the same way but must end
//! up strictly positive.

use crate::error::{BridgeError, Result};
use crate::pixel::{Dimensions, PixelBuffer};

/// A numeric value received from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostNumber {
    Int(i64),
    Float(f64),
}

impl From<i64> for HostNumber {
    fn from(value: i64) -> Self {
        HostNumber::Int(value)
    }
}

impl From<f64> for HostNumber {
    fn from(value: f64) -> Self {
        HostNumber::Float(value)
    }
}

/// Narrow a host value to a channel intensity
pub fn narrow_channel(value: HostNumber) -> u8 {
    match value {
        HostNumber::Int(v) => v.clamp(0, u8::MAX as i64) as u8,
        // `as` truncates toward zero, saturates, and maps NaN to 0
        HostNumber::Float(v) => v as u8,
    }
}

/// Widen a channel intensity back to a host integer
pub fn widen_channel(value: u8) -> i64 {
    value as i64
}

/// Narrow a host value to a width or height
pub fn narrow_dimension(value: HostNumber, name: &str) -> Result<u32> {
    let narrowed = match value {
        HostNumber::Int(v) => u32::try_from(v).ok(),
        HostNumber::Float(v) if v.is_finite() => {
            let t = v.trunc();
            (t >= 0.0 && t <= u32::MAX as f64).then_some(t as u32)
        }
        HostNumber::Float(_) => None,
    };

    match narrowed {
        Some(v) if v > 0 => Ok(v),
        _ => Err(BridgeError::InvalidArgument(format!(
            "{name} must be a positive integer, got {}",
            match value {
                HostNumber::Int(v) => v.to_string(),
                HostNumber::Float(v) => v.to_string(),
            }
        ))),
    }
}

/// Narrow `width` and `height` host values into [`Dimensions`]
pub fn dimensions_from_host(width: HostNumber, height: HostNumber) -> Result<Dimensions> {
    Dimensions::new(
        narrow_dimension(width, "width")?,
        narrow_dimension(height, "height")?,
    )
}

/// Build a pixel buffer from host values.
///
/// The length is checked before any value is narrowed, so a wrongly sized
/// array fails with `SizeMismatch` and is never truncated or padded.
pub fn pixels_from_host<I>(values: I, dims: Dimensions) -> Result<PixelBuffer>
where
    I: IntoIterator<Item = HostNumber>,
    I::IntoIter: ExactSizeIterator,
{
    let values = values.into_iter();
    let expected = dims.buffer_len()?;
    if values.len() != expected {
        return Err(BridgeError::SizeMismatch {
            expected,
            actual: values.len(),
        });
    }

    PixelBuffer::new(values.map(narrow_channel).collect(), dims)
}

/// Hand pixel values back to the host as integers
pub fn pixels_to_host(pixels: &PixelBuffer) -> Vec<i64> {
    pixels.as_bytes().iter().copied().map(widen_channel).collect()
}
