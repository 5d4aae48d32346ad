//! Definition registry abstraction.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::definition::Definition;

/// Read-only mapping from a definition id to its record.
///
/// Registries are populated once by a loader and then only queried, so the
/// trait exposes no mutation.
pub trait DefinitionRegistry<D: Definition>: Send + Sync {
    /// Returns the record registered under `id`, if any.
    fn get(&self, id: u32) -> Option<&D>;

    /// Returns the number of registered records.
    fn len(&self) -> usize;

    /// Returns `true` if the registry holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D: Definition, S: BuildHasher + Send + Sync> DefinitionRegistry<D> for HashMap<u32, D, S> {
    fn get(&self, id: u32) -> Option<&D> {
        HashMap::get(self, &id)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<D: Definition> DefinitionRegistry<D> for BTreeMap<u32, D> {
    fn get(&self, id: u32) -> Option<&D> {
        BTreeMap::get(self, &id)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}
