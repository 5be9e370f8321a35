//! Creative inventory placement.

use serde::{Deserialize, Serialize};

/// Host-defined creative inventory categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreativeCategory {
    #[default]
    All,
    None,
    Construction,
    Nature,
    Equipment,
    Items,
}

impl CreativeCategory {
    /// The numeric id the client expects in the `creative_category` property.
    ///
    /// `All` and `None` have no dedicated tab and share id `0`.
    #[must_use]
    pub const fn numeric_id(self) -> i32 {
        match self {
            Self::Construction => 1,
            Self::Nature => 2,
            Self::Equipment => 3,
            Self::Items => 4,
            Self::All | Self::None => 0,
        }
    }

    /// Returns the lowercase category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::None => "none",
            Self::Construction => "construction",
            Self::Nature => "nature",
            Self::Equipment => "equipment",
            Self::Items => "items",
        }
    }
}

impl std::fmt::Display for CreativeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a piece of content appears in the creative inventory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreativeInfo {
    /// The creative tab.
    pub category: CreativeCategory,
    /// The collapsible group inside the tab, empty for none.
    pub group: String,
}

impl CreativeInfo {
    #[must_use]
    pub fn new(category: CreativeCategory, group: impl Into<String>) -> Self {
        Self {
            category,
            group: group.into(),
        }
    }
}
