use thiserror::Error;

use crate::gameworld::ComponentTypeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("component type {0} was never registered")]
    NotRegistered(ComponentTypeId),
    #[error("component type {id} is already registered as `{existing}`, cannot register `{incoming}`")]
    IdCollision {
        id: ComponentTypeId,
        existing: &'static str,
        incoming: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    #[error("entity has no component of type `{component}`")]
    NotFound { component: &'static str },
}

/// Raised when a release asks for more bytes than are currently tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot release {requested} bytes, only {tracked} are tracked")]
pub struct AccountingUnderflow {
    pub requested: usize,
    pub tracked: usize,
}

#[derive(Debug, Error)]
#[error("Reason: {0}")]
pub struct WorldModificationError(pub String);
