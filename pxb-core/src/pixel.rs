use ndarray::Array3;
use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Interleaved channels per pixel (RGB)
pub const CHANNELS: usize = 3;

/// Image dimensions in pixels, both strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BridgeError::InvalidArgument(format!(
                "width and height must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in one packed row (no padding)
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Exact length of a pixel buffer with these dimensions
    pub fn buffer_len(&self) -> Result<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| {
                BridgeError::InvalidArgument(format!(
                    "{}x{} image is too large to address",
                    self.width, self.height
                ))
            })
    }
}

/// Row-major interleaved RGB bytes whose length always equals `width * height * 3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dims: Dimensions,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw bytes, rejecting any length other than `width * height * 3`
    pub fn new(data: Vec<u8>, dims: Dimensions) -> Result<Self> {
        let expected = dims.buffer_len()?;
        if data.len() != expected {
            return Err(BridgeError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Take pixels from an array shaped `[height, width, 3]`
    pub fn from_array3(array: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = array.dim();
        if channels != CHANNELS {
            return Err(BridgeError::InvalidArgument(format!(
                "expected {CHANNELS} channels, got {channels}"
            )));
        }
        let width = u32::try_from(width)
            .map_err(|_| BridgeError::invalid_argument("array width exceeds u32"))?;
        let height = u32::try_from(height)
            .map_err(|_| BridgeError::invalid_argument("array height exceeds u32"))?;
        let dims = Dimensions::new(width, height)?;

        // Logical iteration order is [y, x, c] whatever the strides are
        let data = array.iter().copied().collect();
        Self::new(data, dims)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> u32 {
        self.dims.width
    }

    pub fn height(&self) -> u32 {
        self.dims.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Channel values of the pixel at column `x`, row `y`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; CHANNELS]> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        let offset = CHANNELS * (y as usize * self.dims.width as usize + x as usize);
        let mut rgb = [0u8; CHANNELS];
        rgb.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        Some(rgb)
    }

    /// View as an array shaped `[height, width, 3]`
    pub fn to_array3(&self) -> Array3<u8> {
        let shape = (
            self.dims.height as usize,
            self.dims.width as usize,
            CHANNELS,
        );
        Array3::from_shape_fn(shape, |(y, x, c)| self.data[(y * shape.1 + x) * CHANNELS + c])
    }
}

/// Header information of an encoded image, as the decoder will present it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}
