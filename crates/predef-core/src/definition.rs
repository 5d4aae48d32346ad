//! Definition record abstractions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The registries a script can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    /// Item definitions.
    Item,
    /// Non-player character definitions.
    Npc,
    /// World object definitions.
    Object,
    /// Equipment definitions, keyed by item id.
    Equipment,
}

impl DefinitionKind {
    /// Returns the lowercase name used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Npc => "npc",
            Self::Object => "object",
            Self::Equipment => "equipment",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait that all definition records implement.
///
/// Records are immutable once loaded and shared across threads, hence the
/// `Send + Sync` bound.
pub trait Definition: Send + Sync + fmt::Debug {
    /// The registry this record belongs to.
    const KIND: DefinitionKind;

    /// Returns the identifier this record is registered under.
    fn id(&self) -> u32;
}
