use log::info;

use super::component::{MarkerA, Name, Position};
use super::entity::Entity;
use super::registry::TypeRegistry;
use crate::errors::RegistryError;

/// Insertion-ordered entity storage. An entity's index is its id.
#[derive(Default)]
pub struct World {
    entities: Vec<Entity>,
}

impl World {
    pub fn push(&mut self, entity: Entity) -> &mut Entity {
        self.entities.push(entity);
        let last = self.entities.len() - 1;
        &mut self.entities[last]
    }

    /// Appends `count` empty entities.
    pub fn create_many(&mut self, count: usize) {
        self.entities.reserve(count);
        self.entities.extend((0..count).map(|_| Entity::default()));
    }

    /// Appends `count` entities carrying a [`Name`], a [`Position`] at the
    /// origin and a [`MarkerA`], added in that order. Names embed the
    /// entity's index in the world.
    pub fn spawn_populated(&mut self, count: usize) -> Result<(), RegistryError> {
        let offset = self.entities.len();
        self.create_many(count);

        for (idx, entity) in self.entities[offset..].iter_mut().enumerate() {
            let idx = idx + offset;
            entity.add_component(Name(format!("Name {}", idx)))?;
            entity.add_component(Position::default())?;
            entity.add_component(MarkerA::default())?;
        }

        info!("Spawned {} entities, world now holds {}", count, self.entities.len());
        Ok(())
    }

    /// Panics when `index` is out of range, like slice indexing.
    pub fn at(&mut self, index: usize) -> &mut Entity {
        &mut self.entities[index]
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    pub fn count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entities.capacity()
    }

    /// Drops every entity and hands the backing buffer back to the allocator.
    pub fn clear_all(&mut self) {
        let dropped = self.entities.len();
        self.entities.clear();
        self.entities.shrink_to_fit();
        info!("Removed {} entities", dropped);
    }

    /// Lazily lists every entity with its component names.
    ///
    /// The registry stays locked until the iterator is dropped, so don't add
    /// components anywhere while holding it.
    pub fn describe_all(&self) -> impl Iterator<Item = (usize, Result<String, RegistryError>)> + '_ {
        let registry = TypeRegistry::global();
        self.entities
            .iter()
            .enumerate()
            .map(move |(idx, entity)| (idx, entity.describe_with(&registry)))
    }
}
