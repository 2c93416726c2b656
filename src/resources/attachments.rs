//! Ordered sequence of objects orbiting the player.
//!
//! Attachment order decides both the ring slot of each object and the order
//! of release: [`Attachments::pop`] always returns the most recently attached
//! entity. Only the interaction and release systems mutate it.

use bevy_ecs::prelude::{Entity, Resource};

#[derive(Resource, Debug, Default)]
pub struct Attachments {
    entities: Vec<Entity>,
    next_ticket: u64,
}

impl Attachments {
    /// Append `entity`. Returns false (and changes nothing) if it is already
    /// attached.
    pub fn push(&mut self, entity: Entity) -> bool {
        if self.contains(entity) {
            return false;
        }
        self.entities.push(entity);
        true
    }

    /// Remove and return the most recently attached entity.
    pub fn pop(&mut self) -> Option<Entity> {
        self.entities.pop()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Attached entities in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    /// Hand out the next attach task ticket.
    pub fn take_ticket(&mut self) -> u64 {
        let t = self.next_ticket;
        self.next_ticket += 1;
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn push_rejects_duplicates() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let mut att = Attachments::default();
        assert!(att.push(a));
        assert!(!att.push(a));
        assert_eq!(att.len(), 1);
    }

    #[test]
    fn pop_is_last_in_first_out() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let c = world.spawn_empty().id();
        let mut att = Attachments::default();
        att.push(a);
        att.push(b);
        att.push(c);
        assert_eq!(att.pop(), Some(c));
        assert_eq!(att.pop(), Some(b));
        assert_eq!(att.pop(), Some(a));
        assert_eq!(att.pop(), None);
        assert!(att.is_empty());
    }

    #[test]
    fn tickets_are_monotonic() {
        let mut att = Attachments::default();
        assert_eq!(att.take_ticket(), 0);
        assert_eq!(att.take_ticket(), 1);
        assert_eq!(att.take_ticket(), 2);
    }
}
