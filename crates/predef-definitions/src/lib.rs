//! Predef Definitions — lookups into the definition registries.
//!
//! Registries are filled by an external loader before scripts run and are
//! read-only afterwards. Every lookup goes through [`lookup`], which fails
//! with `PredefError::DefinitionNotFound` instead of falling back to a
//! default record.

pub mod facade;
pub mod lookup;
pub mod records;
pub mod table;

pub use facade::Definitions;
pub use lookup::lookup;
pub use records::{
    EquipmentDefinition, EquipmentSlot, ItemDefinition, NpcDefinition, ObjectDefinition,
};
pub use table::DefinitionTable;
