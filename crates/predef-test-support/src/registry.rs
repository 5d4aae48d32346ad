//! Test registries — mock `DefinitionRegistry` implementations for tests.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Mutex;

use predef_core::definition::Definition;
use predef_core::registry::DefinitionRegistry;

/// A registry that serves a fixed set of records and records every id it is
/// asked for, hits and misses alike.
#[derive(Debug)]
pub struct RecordingRegistry<D> {
    entries: BTreeMap<u32, D>,
    queried: Mutex<Vec<u32>>,
}

impl<D: Definition> RecordingRegistry<D> {
    /// Create a recording registry keyed by each record's own id.
    #[must_use]
    pub fn new(records: Vec<D>) -> Self {
        Self {
            entries: records.into_iter().map(|d| (d.id(), d)).collect(),
            queried: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all ids that were queried.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn queried_ids(&self) -> Vec<u32> {
        self.queried.lock().unwrap().clone()
    }
}

impl<D: Definition> DefinitionRegistry<D> for RecordingRegistry<D> {
    fn get(&self, id: u32) -> Option<&D> {
        self.queried.lock().unwrap().push(id);
        self.entries.get(&id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A registry with no records. Useful for testing "definition not found"
/// paths.
#[derive(Debug)]
pub struct EmptyRegistry<D>(PhantomData<fn() -> D>);

impl<D> EmptyRegistry<D> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<D> Default for EmptyRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Definition> DefinitionRegistry<D> for EmptyRegistry<D> {
    fn get(&self, _id: u32) -> Option<&D> {
        None
    }

    fn len(&self) -> usize {
        0
    }
}
