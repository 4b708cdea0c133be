//! Entity Trait
//!
//! Every server-owned record is keyed by an opaque string id.

/// Core trait for records kept in a state collection
pub trait Entity: Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Replace the entry with the same id. Returns false when no entry matched.
pub fn replace_by_id<T: Entity>(items: &mut [T], updated: T) -> bool {
    match items.iter_mut().find(|item| item.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove every entry with the given id, keeping the others in order.
pub fn remove_by_id<T: Entity>(items: &mut Vec<T>, id: &str) {
    items.retain(|item| item.id() != id);
}
