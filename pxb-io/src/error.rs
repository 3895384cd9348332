use image::ImageError;
use pxb_core::BridgeError;

/// Map a codec error raised while reading into `DecodeFailure`
pub(crate) fn decode_failure(err: ImageError) -> BridgeError {
    match err {
        ImageError::Limits(e) => BridgeError::DecodeFailure(format!("decode limits exceeded: {e}")),
        e => BridgeError::DecodeFailure(e.to_string()),
    }
}

/// Map a codec error raised while writing into `EncodeFailure`
pub(crate) fn encode_failure(err: ImageError) -> BridgeError {
    BridgeError::EncodeFailure(err.to_string())
}
