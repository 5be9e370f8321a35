//! Registry error types.

use content_component::ComponentSerializationError;

use crate::host::ContentKind;

/// Errors reported by a [`HostFactory`](crate::host::HostFactory).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The host already holds a registration under this identifier.
    #[error("{kind} {identifier} is already registered with the host factory")]
    AlreadyRegistered {
        kind: ContentKind,
        identifier: String,
    },

    /// The host refused the registration for a reason of its own.
    #[error("host refused {kind} {identifier}: {reason}")]
    Rejected {
        kind: ContentKind,
        identifier: String,
        reason: String,
    },
}

/// Errors raised while registering content.
///
/// None of these are transient; retrying with the same input fails the same
/// way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The identifier is already registered for this content kind. The
    /// earlier registration is left untouched.
    #[error("{kind} identifier {identifier} is already registered")]
    DuplicateIdentifier {
        kind: ContentKind,
        identifier: String,
    },

    /// A component of the object could not be turned into a tag.
    #[error(transparent)]
    Serialization(#[from] ComponentSerializationError),

    /// The host factory refused the registration for a reason other than a
    /// duplicate identifier.
    #[error("host rejected registration: {0}")]
    Host(HostError),
}

impl From<HostError> for RegistryError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::AlreadyRegistered { kind, identifier } => {
                Self::DuplicateIdentifier { kind, identifier }
            }
            other @ HostError::Rejected { .. } => Self::Host(other),
        }
    }
}

/// The shared packet cache is not in a state the entity identifier patch can
/// merge into.
///
/// Never skipped silently: clients would otherwise receive an incomplete
/// identifier list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CachePreconditionError {
    /// The host has not built the actor identifier packet yet.
    #[error("actor identifier packet has not been built")]
    NotBuilt,

    /// The packet root has no `idlist` entry.
    #[error("actor identifier packet has no idlist")]
    MissingIdList,

    /// `idlist` is not a list.
    #[error("actor identifier idlist is not a list")]
    MalformedIdList,

    /// An `idlist` entry is not a tree with a string `id`.
    #[error("actor identifier idlist entry {index} has no string id")]
    MalformedEntry { index: usize },
}
