use std::{any::Any, fmt::Display};

type Vec2i = cgmath::Vector2<i32>;

/// Identity of a component type, derived from its [`Component::NAME`] with
/// FNV-1a 64 at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }
}

impl Display for ComponentTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Anything that can be attached to an [`Entity`](super::Entity).
///
/// `NAME` doubles as the display name in the type registry and as the seed of
/// the type's id, so it has to be unique across all components of a program.
/// A second type reusing a name is refused when it is first added.
pub trait Component: Any {
    const NAME: &'static str;
    const ID: ComponentTypeId = ComponentTypeId::from_name(Self::NAME);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Component for Name {
    const NAME: &'static str = "Name";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub Vec2i);

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self(Vec2i::new(x, y))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Component for Position {
    const NAME: &'static str = "Position";
}

// Payload-only markers, used to see how the per-entity footprint moves when
// one more small component is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerA(pub i32);

impl Component for MarkerA {
    const NAME: &'static str = "MarkerA";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerB(pub i32);

impl Component for MarkerB {
    const NAME: &'static str = "MarkerB";
}
