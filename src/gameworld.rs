mod component;
mod entity;
mod registry;
mod world;

pub use component::*;
pub use entity::Entity;
pub use registry::*;
pub use world::World;
