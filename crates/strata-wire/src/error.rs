use thiserror::Error;

/// Result alias for wire operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors produced while decoding a wire buffer.
///
/// All of these are fatal for the stream that produced them; there is no
/// recovery point inside a buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("unexpected end of buffer: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd { needed: usize, remaining: usize },

    #[error("varint continues past 10 bytes")]
    VarintOverflow,

    #[error("length prefix {length} exceeds the {remaining} remaining bytes")]
    LengthOverflow { length: u64, remaining: usize },

    #[error("invalid boolean byte {0:#04x}")]
    InvalidBool(u8),

    #[error("invalid UTF-8 in string: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("invalid value on the wire: {reason}")]
    InvalidValue { reason: String },
}

impl WireError {
    /// Build a [`WireError::InvalidValue`] for an illegal discriminant,
    /// such as an unregistered name arriving over the network.
    pub fn invalid_value(reason: impl ToString) -> Self {
        WireError::InvalidValue {
            reason: reason.to_string(),
        }
    }
}
