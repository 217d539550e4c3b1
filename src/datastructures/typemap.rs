use std::{
    any::Any,
    collections::{btree_map::Entry, BTreeMap},
};

use crate::gameworld::{Component, ComponentTypeId};

/// Owns at most one value per component type, ordered by [`ComponentTypeId`].
#[derive(Default)]
pub struct TypeMap {
    bindings: BTreeMap<ComponentTypeId, Box<dyn Any>>,
}

impl TypeMap {
    /// Inserts `value`, dropping whatever was stored for `T` before.
    pub fn put<T: Component>(&mut self, value: T) -> &mut T {
        let slot = match self.bindings.entry(T::ID) {
            Entry::Occupied(mut entry) => {
                entry.insert(Box::new(value));
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(Box::new(value)),
        };
        slot.downcast_mut()
            .expect("slot holds the value that was just inserted")
    }

    pub fn get<T: Component>(&self) -> Option<&T> {
        self.bindings
            .get(&T::ID)
            .and_then(|boxed| boxed.downcast_ref())
    }

    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.bindings
            .get_mut(&T::ID)
            .and_then(|boxed| boxed.downcast_mut())
    }

    pub fn contains<T: Component>(&self) -> bool {
        self.bindings.contains_key(&T::ID)
    }

    pub fn remove<T: Component>(&mut self) -> Option<T> {
        if !self.bindings.get(&T::ID)?.is::<T>() {
            return None;
        }
        self.bindings
            .remove(&T::ID)?
            .downcast::<T>()
            .ok()
            .map(|boxed| *boxed)
    }

    pub fn keys(&self) -> impl Iterator<Item = ComponentTypeId> + '_ {
        self.bindings.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}
