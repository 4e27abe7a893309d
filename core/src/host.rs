//! Host interface contract.
//!
//! The game-memory reader, draw backend and plugin scheduler all
//! belong to the host application; this module defines the minimal
//! read surface the tracker needs from it. Entity handles are backed
//! by live game memory, so liveness and validity can change between
//! the discovery callback and a later tick. Tracked entities are
//! therefore stored by id and re-resolved through [`EntityLookup`]
//! every time they are needed, never cached by value.

use crate::grid::GridPos;
use glam::Vec3;
use thiserror::Error;

/// Host-assigned entity id. Opaque; unique within one area instance,
/// may be reused across instances.
pub type EntityId = u32;

/// One row of an entity's stat table. The table is unordered and
/// `name` is the host's display string for the stat key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub name: String,
    pub value: i32,
}

impl StatEntry {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Faults raised while reading an entity capability from host memory.
///
/// These are caught at the classification boundary and downgrade the
/// entity to "no match"; they never propagate to the host.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("malformed modifier list: {detail}")]
    MalformedModifierList { detail: String },
    #[error("entity detached from host memory")]
    Detached,
}

/// Read-only view of one game entity as exposed by the host.
pub trait GameEntity {
    fn id(&self) -> EntityId;

    /// False while the backing memory is out of scope. Invalid
    /// entities are skipped, not dropped; validity can return.
    fn is_valid(&self) -> bool;

    fn is_dead(&self) -> bool;

    fn is_hostile(&self) -> bool;

    /// Full metadata identifier path, e.g.
    /// `Metadata/Terrain/Leagues/Ritual/RitualBlocker`.
    fn metadata(&self) -> &str;

    fn grid_pos(&self) -> GridPos;

    /// World-space position, used for on-screen label placement.
    fn world_pos(&self) -> Vec3;

    /// Modifier identifiers from the "magic properties" capability.
    /// `Ok(None)` means the entity has no such capability.
    fn magic_mods(&self) -> Result<Option<Vec<String>>, HostError>;

    /// The entity's stat table, if it has one.
    fn stats(&self) -> Option<&[StatEntry]>;
}

/// Resolve an entity id against the host's current entity list.
pub trait EntityLookup {
    /// `None` once the id no longer resolves at all (the entity left
    /// the host's list for good).
    fn entity(&self, id: EntityId) -> Option<&dyn GameEntity>;
}
