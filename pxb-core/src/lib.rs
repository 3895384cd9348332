pub mod config;
pub mod error;
pub mod marshal;
pub mod pixel;

pub use config::{Compression, DecodeConfig, DecodeLimits, Filter, PngOptions};
pub use error::{BridgeError, ErrorKind, Result};
pub use marshal::HostNumber;
pub use pixel::{CHANNELS, Dimensions, ImageInfo, PixelBuffer};
