//! Generic lookup-or-fail over any definition registry.

use predef_core::definition::Definition;
use predef_core::error::PredefError;
use predef_core::registry::DefinitionRegistry;
use tracing::warn;

/// Returns the record registered under `id` in `registry`.
///
/// # Errors
///
/// Returns `PredefError::DefinitionNotFound` carrying the registry kind and
/// `id` when no record exists, and `PredefError::DefinitionMismatch` when the
/// registry holds a record with a different id under `id`.
pub fn lookup<D, R>(registry: &R, id: u32) -> Result<&D, PredefError>
where
    D: Definition,
    R: DefinitionRegistry<D> + ?Sized,
{
    let kind = D::KIND;
    if let Some(definition) = registry.get(id) {
        let found = definition.id();
        if found != id {
            warn!(%kind, id, found, "definition registered under wrong id");
            return Err(PredefError::DefinitionMismatch { kind, id, found });
        }
        return Ok(definition);
    }

    warn!(%kind, id, "definition not found");
    Err(PredefError::DefinitionNotFound { kind, id })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use predef_core::definition::DefinitionKind;
    use predef_core::error::PredefError;
    use predef_core::registry::DefinitionRegistry;
    use predef_test_support::{EmptyRegistry, RecordingRegistry};

    use super::lookup;
    use crate::records::{ItemDefinition, ObjectDefinition};

    fn item(id: u32, name: &str) -> ItemDefinition {
        ItemDefinition {
            id,
            name: name.to_owned(),
            examine: format!("It's a {name}."),
            stackable: false,
            value: 1,
            members: false,
        }
    }

    #[test]
    fn test_lookup_returns_exact_record() {
        // Arrange
        let expected = item(995, "Coins");
        let registry = RecordingRegistry::new(vec![item(1, "Pot"), expected.clone()]);

        // Act
        let found = lookup(&registry, 995).unwrap();

        // Assert
        assert_eq!(found, &expected);
        assert_eq!(registry.queried_ids(), vec![995]);
    }

    #[test]
    fn test_lookup_missing_id_reports_kind_and_id() {
        // Arrange
        let registry = EmptyRegistry::<ObjectDefinition>::new();

        // Act
        let result = lookup(&registry, 4242);

        // Assert
        match result.unwrap_err() {
            PredefError::DefinitionNotFound { kind, id } => {
                assert_eq!(kind, DefinitionKind::Object);
                assert_eq!(id, 4242);
            }
            other => panic!("expected DefinitionNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_does_not_cache_results() {
        // Arrange
        let registry = RecordingRegistry::new(vec![item(3, "Bread")]);

        // Act
        let _ = lookup(&registry, 3);
        let _ = lookup(&registry, 3);
        let _ = lookup(&registry, 4);

        // Assert
        assert_eq!(registry.queried_ids(), vec![3, 3, 4]);
    }

    #[test]
    fn test_lookup_rejects_record_keyed_under_another_id() {
        // Arrange
        let mut map: HashMap<u32, ItemDefinition> = HashMap::new();
        map.insert(5, item(6, "Tinderbox"));

        // Act
        let result = lookup(&map, 5);

        // Assert
        match result {
            Err(PredefError::DefinitionMismatch { kind, id, found }) => {
                assert_eq!(kind, DefinitionKind::Item);
                assert_eq!(id, 5);
                assert_eq!(found, 6);
            }
            other => panic!("expected DefinitionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_works_over_plain_maps_and_trait_objects() {
        // Arrange
        let mut map: HashMap<u32, ItemDefinition> = HashMap::new();
        map.insert(11, item(11, "Rune"));
        let registry: &dyn DefinitionRegistry<ItemDefinition> = &map;

        // Act
        let found = lookup(registry, 11).unwrap();

        // Assert
        assert_eq!(found.name, "Rune");
        assert!(lookup(registry, 12).is_err());
    }
}
