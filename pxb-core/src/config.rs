//! Codec configuration

use serde::{Deserialize, Serialize};

/// Default decoder allocation cap, 512 MiB
pub const DEFAULT_MAX_ALLOC: u64 = 512 * 1024 * 1024;

/// Resource caps applied while decoding untrusted input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeLimits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub max_alloc: Option<u64>,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_width: None,
            max_height: None,
            max_alloc: Some(DEFAULT_MAX_ALLOC),
        }
    }
}

impl DecodeLimits {
    /// No caps at all
    pub fn unlimited() -> Self {
        Self {
            max_width: None,
            max_height: None,
            max_alloc: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub limits: DecodeLimits,
}

/// Deflate effort for PNG output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Default,
    Fast,
    Best,
}

/// PNG row filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    None,
    Sub,
    Up,
    Avg,
    Paeth,
    #[default]
    Adaptive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PngOptions {
    pub compression: Compression,
    pub filter: Filter,
}
