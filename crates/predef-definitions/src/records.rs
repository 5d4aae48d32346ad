//! Definition records for each registry kind.
//!
//! Only the fields scripts commonly read are modelled here; the loader that
//! fills the registries owns the full data set.

use predef_core::definition::{Definition, DefinitionKind};
use serde::{Deserialize, Serialize};

/// Number of attack, defence and other bonuses an equipment piece carries.
pub const BONUS_COUNT: usize = 12;

/// An item definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// The item id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Examine text.
    pub examine: String,
    /// Whether the item stacks in a single slot.
    pub stackable: bool,
    /// Base shop value.
    pub value: u32,
    /// Whether the item is members-only.
    pub members: bool,
}

impl Definition for ItemDefinition {
    const KIND: DefinitionKind = DefinitionKind::Item;

    fn id(&self) -> u32 {
        self.id
    }
}

/// A non-player character definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcDefinition {
    /// The npc id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Examine text.
    pub examine: String,
    /// Combat level, zero for non-combatants.
    pub combat_level: u16,
    /// Tiles occupied along each axis.
    pub size: u8,
}

impl Definition for NpcDefinition {
    const KIND: DefinitionKind = DefinitionKind::Npc;

    fn id(&self) -> u32 {
        self.id
    }
}

/// A world object definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDefinition {
    /// The object id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Examine text.
    pub examine: String,
    /// Width in tiles.
    pub width: u8,
    /// Length in tiles.
    pub length: u8,
    /// Whether the object blocks movement.
    pub solid: bool,
}

impl Definition for ObjectDefinition {
    const KIND: DefinitionKind = DefinitionKind::Object;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Equipment slot an item occupies when worn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    /// Helmets and hats.
    Head,
    /// Capes and cloaks.
    Cape,
    /// Amulets and necklaces.
    Amulet,
    /// Main-hand weapons.
    Weapon,
    /// Body armour and shirts.
    Body,
    /// Shields and off-hand items.
    Shield,
    /// Leg armour and skirts.
    Legs,
    /// Gloves and gauntlets.
    Hands,
    /// Boots.
    Feet,
    /// Rings.
    Ring,
    /// Arrows, bolts and other ammunition.
    Ammunition,
}

/// Equipment properties of a wearable item, keyed by the item's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentDefinition {
    /// The id of the item this entry describes.
    pub id: u32,
    /// Slot the item is worn in.
    pub slot: EquipmentSlot,
    /// Whether wielding also occupies the shield slot.
    pub two_handed: bool,
    /// Whether wearing hides the arms.
    pub full_body: bool,
    /// Attack, defence and other bonuses.
    pub bonuses: [i32; BONUS_COUNT],
}

impl Definition for EquipmentDefinition {
    const KIND: DefinitionKind = DefinitionKind::Equipment;

    fn id(&self) -> u32 {
        self.id
    }
}
