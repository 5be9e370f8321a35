//! Component-layer error types.

/// A component payload has no tag representation.
///
/// Fatal for the registration of the object that owns the component; other
/// objects are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to get tag type for component {component}")]
pub struct ComponentSerializationError {
    /// Name of the offending component.
    pub component: String,
}

/// Errors raised when encoding descriptor trees for a host collaborator.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Failed to encode a tree to MessagePack.
    #[error("failed to encode descriptor: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// Failed to decode a tree from MessagePack.
    #[error("failed to decode descriptor: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}
