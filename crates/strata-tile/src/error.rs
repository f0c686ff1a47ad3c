use thiserror::Error;

/// Errors from applying property values to a tile state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("tile has no property {property:?}")]
    UnknownProperty { property: String },

    #[error("property {property:?} does not allow value {token:?}")]
    InvalidToken { property: String, token: String },
}
