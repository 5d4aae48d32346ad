//! Immutable id-keyed definition table.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use predef_core::definition::Definition;
use predef_core::error::PredefError;
use predef_core::registry::DefinitionRegistry;

/// A registry built once from a set of records and never mutated.
///
/// Records are keyed by their own `id()`, so a lookup can never return a
/// record registered under a different id.
#[derive(Debug, Clone)]
pub struct DefinitionTable<D> {
    entries: HashMap<u32, D>,
}

impl<D: Definition> DefinitionTable<D> {
    /// Builds a table from `definitions`.
    ///
    /// # Errors
    ///
    /// Returns `PredefError::DuplicateDefinition` if two records share an id.
    pub fn from_definitions<I>(definitions: I) -> Result<Self, PredefError>
    where
        I: IntoIterator<Item = D>,
    {
        let definitions = definitions.into_iter();
        let mut entries = HashMap::with_capacity(definitions.size_hint().0);
        for definition in definitions {
            let id = definition.id();
            match entries.entry(id) {
                Entry::Occupied(_) => {
                    return Err(PredefError::DuplicateDefinition { kind: D::KIND, id });
                }
                Entry::Vacant(slot) => {
                    slot.insert(definition);
                }
            }
        }
        Ok(Self { entries })
    }
}

impl<D> Default for DefinitionTable<D> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<D: Definition> DefinitionRegistry<D> for DefinitionTable<D> {
    fn get(&self, id: u32) -> Option<&D> {
        self.entries.get(&id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use predef_core::definition::DefinitionKind;
    use predef_core::error::PredefError;
    use predef_core::registry::DefinitionRegistry;

    use super::DefinitionTable;
    use crate::records::NpcDefinition;

    fn npc(id: u32, name: &str) -> NpcDefinition {
        NpcDefinition {
            id,
            name: name.to_owned(),
            examine: String::new(),
            combat_level: 2,
            size: 1,
        }
    }

    #[test]
    fn test_from_definitions_keys_by_record_id() {
        // Arrange
        let records = vec![npc(1, "Man"), npc(2, "Woman")];

        // Act
        let table = DefinitionTable::from_definitions(records).unwrap();

        // Assert
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(2).map(|d| d.name.as_str()), Some("Woman"));
        assert!(table.get(3).is_none());
    }

    #[test]
    fn test_from_definitions_rejects_duplicate_ids() {
        // Arrange
        let records = vec![npc(7, "Guard"), npc(7, "Guard (alt)")];

        // Act
        let result = DefinitionTable::from_definitions(records);

        // Assert
        match result {
            Err(PredefError::DuplicateDefinition { kind, id }) => {
                assert_eq!(kind, DefinitionKind::Npc);
                assert_eq!(id, 7);
            }
            other => panic!("expected DuplicateDefinition, got {other:?}"),
        }
    }

    #[test]
    fn test_default_table_is_empty() {
        let table: DefinitionTable<NpcDefinition> = DefinitionTable::default();

        assert!(table.is_empty());
        assert!(table.get(0).is_none());
    }
}
