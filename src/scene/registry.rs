use rustc_hash::FxHashMap;

use super::entity::{EntityId, EntityLookup};
use crate::error::ViewportError;

/// Flat in-memory id → name storage.
///
/// Stands in for the engine world when the editor runs standalone and in
/// tests. Ids are allocated monotonically and never reused.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    names: FxHashMap<EntityId, String>,
    next_id: u32,
}

impl EntityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its id.
    ///
    /// # Errors
    ///
    /// [`ViewportError::EntityIdsExhausted`] once every id has been handed
    /// out.
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
    ) -> Result<EntityId, ViewportError> {
        let next = self
            .next_id
            .checked_add(1)
            .ok_or(ViewportError::EntityIdsExhausted)?;
        let id = EntityId(self.next_id);
        self.next_id = next;
        let _ = self.names.insert(id, name.into());
        Ok(id)
    }

    /// Remove an entity. Returns its name if it existed.
    pub fn despawn(&mut self, id: EntityId) -> Option<String> {
        self.names.remove(&id)
    }

    /// Rename an entity. Blank names are rejected.
    ///
    /// Returns `true` if the name changed.
    pub fn rename(&mut self, id: EntityId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.names.get_mut(&id) {
            Some(current) if current.as_str() != name => {
                name.clone_into(current);
                true
            }
            _ => false,
        }
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entities in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &str)> {
        let mut entries: Vec<_> = self
            .names
            .iter()
            .map(|(id, name)| (*id, name.as_str()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter()
    }
}

impl EntityLookup for EntityRegistry {
    fn entity_name(&self, id: EntityId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_fails_once_ids_run_out() {
        let mut registry = EntityRegistry {
            names: FxHashMap::default(),
            next_id: u32::MAX - 1,
        };
        let last = registry.spawn("last").unwrap();
        assert_eq!(last, EntityId(u32::MAX - 1));
        assert!(matches!(
            registry.spawn("overflow"),
            Err(ViewportError::EntityIdsExhausted)
        ));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.entity_name(last), Some("last"));
    }

    #[test]
    fn spawn_allocates_increasing_ids() {
        let mut registry = EntityRegistry::new();
        let cam = registry.spawn("cam").unwrap();
        let teapot = registry.spawn("teapot").unwrap();
        assert!(teapot > cam);
        assert_eq!(registry.entity_name(teapot), Some("teapot"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_despawn() {
        let mut registry = EntityRegistry::new();
        let first = registry.spawn("a").unwrap();
        assert_eq!(registry.despawn(first).as_deref(), Some("a"));
        let second = registry.spawn("b").unwrap();
        assert_ne!(first, second);
        assert!(!registry.contains(first));
    }

    #[test]
    fn rename_rejects_blank_names() {
        let mut registry = EntityRegistry::new();
        let id = registry.spawn("light").unwrap();
        assert!(!registry.rename(id, "   "));
        assert!(registry.rename(id, " sun "));
        assert_eq!(registry.entity_name(id), Some("sun"));
        assert!(!registry.rename(id, "sun"));
        assert!(!registry.rename(EntityId(99), "ghost"));
    }

    #[test]
    fn iter_is_sorted_by_id() {
        let mut registry = EntityRegistry::new();
        for name in ["c", "a", "b"] {
            let _ = registry.spawn(name).unwrap();
        }
        let names: Vec<_> = registry.iter().map(|(_, name)| name).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }
}
