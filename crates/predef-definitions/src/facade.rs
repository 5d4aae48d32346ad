//! Script-facing facade over the four definition registries.

use predef_core::error::PredefError;

use crate::lookup::lookup;
use crate::records::{EquipmentDefinition, ItemDefinition, NpcDefinition, ObjectDefinition};
use crate::table::DefinitionTable;

/// The loaded registries, shared read-only by every script.
///
/// Wrap in an `Arc` to hand the same instance to many workers.
#[derive(Debug, Default)]
pub struct Definitions {
    items: DefinitionTable<ItemDefinition>,
    npcs: DefinitionTable<NpcDefinition>,
    objects: DefinitionTable<ObjectDefinition>,
    equipment: DefinitionTable<EquipmentDefinition>,
}

impl Definitions {
    /// Bundles already-populated registries.
    #[must_use]
    pub fn new(
        items: DefinitionTable<ItemDefinition>,
        npcs: DefinitionTable<NpcDefinition>,
        objects: DefinitionTable<ObjectDefinition>,
        equipment: DefinitionTable<EquipmentDefinition>,
    ) -> Self {
        Self {
            items,
            npcs,
            objects,
            equipment,
        }
    }

    /// Returns the item definition for `id`.
    ///
    /// # Errors
    ///
    /// Returns `PredefError::DefinitionNotFound` if no item has this id.
    pub fn item_def(&self, id: u32) -> Result<&ItemDefinition, PredefError> {
        lookup(&self.items, id)
    }

    /// Returns the name of the item with `id`.
    ///
    /// # Errors
    ///
    /// Returns `PredefError::DefinitionNotFound` if no item has this id.
    pub fn item_name(&self, id: u32) -> Result<&str, PredefError> {
        self.item_def(id).map(|def| def.name.as_str())
    }

    /// Returns the npc definition for `id`.
    ///
    /// # Errors
    ///
    /// Returns `PredefError::DefinitionNotFound` if no npc has this id.
    pub fn npc_def(&self, id: u32) -> Result<&NpcDefinition, PredefError> {
        lookup(&self.npcs, id)
    }

    /// Returns the object definition for `id`.
    ///
    /// # Errors
    ///
    /// Returns `PredefError::DefinitionNotFound` if no object has this id.
    pub fn object_def(&self, id: u32) -> Result<&ObjectDefinition, PredefError> {
        lookup(&self.objects, id)
    }

    /// Returns the equipment definition for the item `id`.
    ///
    /// # Errors
    ///
    /// Returns `PredefError::DefinitionNotFound` if the item is not
    /// equippable.
    pub fn equip_def(&self, id: u32) -> Result<&EquipmentDefinition, PredefError> {
        lookup(&self.equipment, id)
    }
}
