//! A small entity/component store: entities own at most one value per
//! component type, looked up by a compile-time type id, while a tracking
//! allocator keeps count of live heap bytes.

pub mod config;
pub mod datastructures;
pub mod errors;
pub mod gameworld;
pub mod memory;
pub mod menu;
