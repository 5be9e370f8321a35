//! Entity identifier cache and the packet cache patch.
//!
//! Every registered entity type id is recorded here. Once registration is
//! done, [`EntityIdentifierCache::patch`] merges the recorded ids into the
//! host's shared actor identifier packet so clients learn about the custom
//! entity types.
//!
//! ```text
//! Uninitialized --register--> Populated --patch--> Patched
//!                                 ^                   |
//!                                 +----register-------+
//! ```
//!
//! Patching is idempotent: ids already present in the packet are never added
//! twice, and ids the host put there are never dropped or reordered.

use std::collections::HashSet;

use content_component::{TagNode, TagValue};
use tracing::{debug, info};

use crate::error::CachePreconditionError;
use crate::packet_cache::{ID_KEY, ID_LIST_KEY, StaticPacketCache, identifier_entry};

/// Lifecycle of an [`EntityIdentifierCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No identifier registered yet.
    Uninitialized,
    /// Holds identifiers that may not be in the packet yet.
    Populated,
    /// Every identifier has been merged into the packet.
    Patched,
}

/// Ordered, duplicate-free list of registered entity type ids.
#[derive(Debug, Clone)]
pub struct EntityIdentifierCache {
    identifiers: Vec<String>,
    state: CacheState,
}

impl EntityIdentifierCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            identifiers: Vec::new(),
            state: CacheState::Uninitialized,
        }
    }

    /// Record an identifier. Returns `false` if it was already recorded.
    pub fn register_identifier(&mut self, identifier: &str) -> bool {
        if self.contains(identifier) {
            return false;
        }
        self.identifiers.push(identifier.to_string());
        self.state = CacheState::Populated;
        true
    }

    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.iter().any(|id| id == identifier)
    }

    /// Recorded identifiers, in registration order.
    #[must_use]
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    #[must_use]
    pub fn state(&self) -> CacheState {
        self.state
    }

    /// Merge every recorded identifier into the actor identifier packet.
    ///
    /// Returns the number of identifiers appended. The packet is validated in
    /// full before anything is written, so a failed patch leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CachePreconditionError`] if the packet has not been built or
    /// its identifier list is malformed.
    pub fn patch(
        &mut self,
        cache: &mut StaticPacketCache,
    ) -> Result<usize, CachePreconditionError> {
        let root = cache
            .actor_identifiers_mut()
            .ok_or(CachePreconditionError::NotBuilt)?;
        let node = root
            .get_mut(ID_LIST_KEY)
            .ok_or(CachePreconditionError::MissingIdList)?;
        let TagNode::List(list) = node else {
            return Err(CachePreconditionError::MalformedIdList);
        };

        let mut present = HashSet::with_capacity(list.len() + self.identifiers.len());
        for (index, entry) in list.iter().enumerate() {
            match entry.as_tree().and_then(|tree| tree.get_value(ID_KEY)) {
                Some(TagValue::String(id)) => {
                    present.insert(id.clone());
                }
                _ => return Err(CachePreconditionError::MalformedEntry { index }),
            }
        }

        let mut appended = 0;
        for identifier in &self.identifiers {
            if present.insert(identifier.clone()) {
                list.push(identifier_entry(identifier));
                appended += 1;
            } else {
                debug!(%identifier, "identifier already in actor identifier packet");
            }
        }

        if self.state == CacheState::Populated {
            self.state = CacheState::Patched;
        }
        info!(appended, total = list.len(), "patched actor identifier packet");
        Ok(appended)
    }
}

impl Default for EntityIdentifierCache {
    fn default() -> Self {
        Self::new()
    }
}
