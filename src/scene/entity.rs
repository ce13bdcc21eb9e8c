use std::fmt;

// ---------------------------------------------------------------------------
// EntityId
// ---------------------------------------------------------------------------

/// Identifier of an entity in the engine world.
///
/// The viewport never owns entities; it only carries the id of the current
/// selection around and resolves it through an [`EntityLookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// EntityLookup
// ---------------------------------------------------------------------------

/// Resolves entity ids to display names.
pub trait EntityLookup {
    /// Name of the entity, or `None` if the id no longer resolves.
    fn entity_name(&self, id: EntityId) -> Option<&str>;

    /// Whether `id` refers to a live entity.
    fn contains(&self, id: EntityId) -> bool {
        self.entity_name(id).is_some()
    }
}
