use std::fmt::Display;

use itertools::Itertools;

use super::component::Component;
use super::registry::{self, TypeRegistry};
use crate::datastructures::TypeMap;
use crate::errors::{ComponentError, RegistryError};

/// A bag of components. Entities carry no id of their own; the owning
/// [`World`](super::World) index is what callers refer to them by.
#[derive(Default)]
pub struct Entity {
    components: TypeMap,
}

impl Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Entity:")?;
        match self.components_str() {
            Ok(listing) => write!(f, "{}", listing),
            Err(_) => writeln!(f, "<unregistered>"),
        }
    }
}

/// Modification operations
impl Entity {
    /// Attaches `component`, replacing any previous component of the same type.
    pub fn add_component<T: Component>(&mut self, component: T) -> Result<&mut T, RegistryError> {
        registry::register_if_absent::<T>()?;
        Ok(self.components.put(component))
    }

    pub fn remove_component<T: Component>(&mut self) -> Option<T> {
        self.components.remove::<T>()
    }

    pub fn clear_components(&mut self) {
        self.components.clear();
    }
}

/// Query operations
impl Entity {
    pub fn get_component<T: Component>(&self) -> Result<&T, ComponentError> {
        self.components
            .get::<T>()
            .ok_or(ComponentError::NotFound { component: T::NAME })
    }

    pub fn get_component_mut<T: Component>(&mut self) -> Result<&mut T, ComponentError> {
        self.components
            .get_mut::<T>()
            .ok_or(ComponentError::NotFound { component: T::NAME })
    }

    pub fn has_component<T: Component>(&self) -> bool {
        self.components.contains::<T>()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Display names of the attached components, in id order.
    pub fn component_names(&self) -> Result<Vec<&'static str>, RegistryError> {
        let registry = TypeRegistry::global();
        self.components
            .keys()
            .map(|id| registry.display_name(id))
            .collect()
    }

    /// One display name per line, in id order.
    pub fn components_str(&self) -> Result<String, RegistryError> {
        self.describe_with(&TypeRegistry::global())
    }

    pub(super) fn describe_with(&self, registry: &TypeRegistry) -> Result<String, RegistryError> {
        self.components
            .keys()
            .map(|id| registry.display_name(id))
            .map_ok(|name| format!("{}\n", name))
            .collect()
    }
}
