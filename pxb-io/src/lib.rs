//! Memory-to-memory image codec operations on RGB pixel buffers

pub mod decode;
pub mod encode;
mod error;
pub mod probe;

pub use decode::{decode, decode_with};
pub use encode::{encode, encode_with};
pub use probe::probe;

// Re-export from pxb-core for convenience
pub use pxb_core::{BridgeError, Dimensions, ErrorKind, ImageInfo, PixelBuffer, Result};
