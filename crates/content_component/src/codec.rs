//! MessagePack hand-off for descriptor trees.
//!
//! Hosts that perform the final tag encoding out of process receive trees in
//! this form. Map keys keep the tree's key order, so equal trees always
//! encode to identical bytes.

use tracing::trace;

use crate::error::CodecError;
use crate::tag::DescriptorTree;

/// Encode a descriptor tree to MessagePack bytes.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if the writer fails.
pub fn encode_tree(tree: &DescriptorTree) -> Result<Vec<u8>, CodecError> {
    let bytes = rmp_serde::to_vec(tree)?;
    trace!(entries = tree.len(), bytes = bytes.len(), "encoded descriptor tree");
    Ok(bytes)
}

/// Decode a descriptor tree from MessagePack bytes.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] if `bytes` is not a MessagePack map of tag
/// nodes.
pub fn decode_tree(bytes: &[u8]) -> Result<DescriptorTree, CodecError> {
    Ok(rmp_serde::from_slice(bytes)?)
}
