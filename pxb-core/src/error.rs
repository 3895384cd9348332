use thiserror::Error;

/// Errors raised at the bridge between host values and the image codec
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),

    #[error("SizeMismatch: expected {expected} values, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("DecodeFailure: {0}")]
    DecodeFailure(String),

    #[error("EncodeFailure: {0}")]
    EncodeFailure(String),
}

/// Failure category of a [`BridgeError`], stable across message changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    SizeMismatch,
    DecodeFailure,
    EncodeFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::SizeMismatch => "SizeMismatch",
            ErrorKind::DecodeFailure => "DecodeFailure",
            ErrorKind::EncodeFailure => "EncodeFailure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            BridgeError::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            BridgeError::DecodeFailure(_) => ErrorKind::DecodeFailure,
            BridgeError::EncodeFailure(_) => ErrorKind::EncodeFailure,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        BridgeError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = BridgeError::invalid_argument("Buffer expected");
        assert_eq!(err.to_string(), "InvalidArgument: Buffer expected");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_size_mismatch_display() {
        let err = BridgeError::SizeMismatch { expected: 6, actual: 5 };
        assert_eq!(err.to_string(), "SizeMismatch: expected 6 values, got 5");
        assert_eq!(err.kind(), ErrorKind::SizeMismatch);
    }

    #[test]
    fn test_codec_failures_display() {
        let err = BridgeError::DecodeFailure("unsupported format".to_string());
        assert_eq!(err.to_string(), "DecodeFailure: unsupported format");
        assert_eq!(err.kind(), ErrorKind::DecodeFailure);

        let err = BridgeError::EncodeFailure("out of memory".to_string());
        assert_eq!(err.to_string(), "EncodeFailure: out of memory");
        assert_eq!(err.kind(), ErrorKind::EncodeFailure);
    }

    #[test]
    fn test_message_starts_with_kind() {
        let errors = [
            BridgeError::invalid_argument("x"),
            BridgeError::SizeMismatch { expected: 1, actual: 0 },
            BridgeError::DecodeFailure("x".to_string()),
            BridgeError::EncodeFailure("x".to_string()),
        ];
        for err in errors {
            assert!(err.to_string().starts_with(err.kind().as_str()));
        }
    }
}
