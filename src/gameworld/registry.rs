use std::{
    any::TypeId,
    collections::{btree_map::Entry, BTreeMap},
    mem::size_of,
};

use log::debug;
use parking_lot::{const_mutex, Mutex, MutexGuard};

use super::component::{Component, ComponentTypeId};
use crate::errors::RegistryError;
use crate::memory::format_human;

const ENTRY_SIZE: usize =
    size_of::<ComponentTypeId>() + size_of::<TypeId>() + size_of::<&'static str>();

static GLOBAL_REGISTRY: Mutex<TypeRegistry> = const_mutex(TypeRegistry::new());

/// Maps component ids back to their display names.
///
/// Entries are only ever added through [`TypeRegistry::register_if_absent`],
/// which every component insertion goes through first. Each entry remembers
/// the Rust type that claimed the id, so two types sharing a name are told
/// apart.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    names: BTreeMap<ComponentTypeId, (TypeId, &'static str)>,
}

impl TypeRegistry {
    pub const fn new() -> Self {
        Self { names: BTreeMap::new() }
    }

    /// Locks the process-wide registry.
    pub fn global() -> MutexGuard<'static, TypeRegistry> {
        GLOBAL_REGISTRY.lock()
    }

    pub fn register_if_absent<T: Component>(&mut self) -> Result<(), RegistryError> {
        let type_id = TypeId::of::<T>();
        match self.names.entry(T::ID) {
            Entry::Occupied(entry) if entry.get().0 == type_id => Ok(()),
            Entry::Occupied(entry) => Err(RegistryError::IdCollision {
                id: T::ID,
                existing: entry.get().1,
                incoming: T::NAME,
            }),
            Entry::Vacant(entry) => {
                entry.insert((type_id, T::NAME));
                debug!(
                    "Registered component type `{}` ({}), registry size: {}",
                    T::NAME,
                    T::ID,
                    format_human(self.footprint() as u64)
                );
                Ok(())
            }
        }
    }

    pub fn display_name(&self, id: ComponentTypeId) -> Result<&'static str, RegistryError> {
        self.names
            .get(&id)
            .map(|&(_, name)| name)
            .ok_or(RegistryError::NotRegistered(id))
    }

    pub fn contains(&self, id: ComponentTypeId) -> bool {
        self.names.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Approximate bytes held by the entries, ignoring tree overhead.
    pub fn footprint(&self) -> usize {
        self.names.len() * ENTRY_SIZE
    }
}

pub fn identity_of<T: Component>() -> ComponentTypeId {
    T::ID
}

pub fn register_if_absent<T: Component>() -> Result<(), RegistryError> {
    TypeRegistry::global().register_if_absent::<T>()
}

pub fn display_name(id: ComponentTypeId) -> Result<&'static str, RegistryError> {
    TypeRegistry::global().display_name(id)
}

pub fn clear_registry() {
    TypeRegistry::global().clear();
}

pub fn registered_count() -> usize {
    TypeRegistry::global().len()
}
