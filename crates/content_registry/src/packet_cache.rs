//! The host's static packet cache.
//!
//! Packets that never change after startup are built once and sent to every
//! client from a shared cache. The actor identifier packet is one of them: it
//! lists every entity type id the client should know about, under
//! `idlist: [ { id: "<identifier>" }, ... ]`.
//!
//! Custom entity types are registered after the host builds that list, so the
//! cache exposes one intentional mutable handle,
//! [`StaticPacketCache::actor_identifiers_mut`], for the entity identifier
//! patch. Taking the handle drops the cached encoding; the next call to
//! [`StaticPacketCache::actor_identifiers_payload`] re-encodes the merged
//! list, so later clients never see a stale payload.

use content_component::{CodecError, DescriptorTree, TagNode, TagValue, codec};
use tracing::debug;

/// Key of the identifier list in the actor identifier packet root.
pub const ID_LIST_KEY: &str = "idlist";

/// Key of the identifier inside one list entry.
pub const ID_KEY: &str = "id";

/// Build one `idlist` entry.
#[must_use]
pub fn identifier_entry(identifier: &str) -> TagNode {
    TagNode::Tree(DescriptorTree::new().with(ID_KEY, TagValue::from(identifier)))
}

/// Shared, lazily built packet cache owned by the host runtime.
#[derive(Debug, Default)]
pub struct StaticPacketCache {
    actor_identifiers: Option<DescriptorTree>,
    encoded: Option<Vec<u8>>,
}

impl StaticPacketCache {
    /// Create a cache whose packets have not been built yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actor_identifiers: None,
            encoded: None,
        }
    }

    /// Build the actor identifier packet from the host's built-in entity ids.
    pub fn build<'a>(&mut self, identifiers: impl IntoIterator<Item = &'a str>) {
        let list: Vec<TagNode> = identifiers.into_iter().map(identifier_entry).collect();
        debug!(count = list.len(), "built actor identifier packet");
        self.install(DescriptorTree::new().with(ID_LIST_KEY, TagNode::List(list)));
    }

    /// Replace the actor identifier packet root wholesale.
    pub fn install(&mut self, root: DescriptorTree) {
        self.actor_identifiers = Some(root);
        self.encoded = None;
    }

    /// Returns the actor identifier packet root, if built.
    #[must_use]
    pub fn actor_identifiers(&self) -> Option<&DescriptorTree> {
        self.actor_identifiers.as_ref()
    }

    /// Mutable access to the actor identifier packet root.
    ///
    /// This is the only sanctioned way to change a built packet. The cached
    /// encoding is invalidated before the handle is returned.
    pub fn actor_identifiers_mut(&mut self) -> Option<&mut DescriptorTree> {
        self.encoded = None;
        self.actor_identifiers.as_mut()
    }

    /// The encoded actor identifier packet, encoding it on first use.
    ///
    /// Returns `Ok(None)` if the packet has not been built.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if the packet cannot be encoded.
    pub fn actor_identifiers_payload(&mut self) -> Result<Option<&[u8]>, CodecError> {
        let Some(root) = &self.actor_identifiers else {
            return Ok(None);
        };
        if self.encoded.is_none() {
            self.encoded = Some(codec::encode_tree(root)?);
        }
        Ok(self.encoded.as_deref())
    }

    /// The identifiers currently in the packet, in list order.
    ///
    /// Entries without a string `id` are skipped.
    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.actor_identifiers
            .as_ref()
            .and_then(|root| root.get(ID_LIST_KEY))
            .and_then(TagNode::as_list)
            .map(|list| {
                list.iter()
                    .filter_map(|entry| match entry.as_tree()?.get_value(ID_KEY)? {
                        TagValue::String(id) => Some(id.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
