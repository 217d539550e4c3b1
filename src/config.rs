pub const BULK_CREATE_COUNT: usize = 1_000_000;
pub const EDIT_NAME_PLACEHOLDER: &str = "Test";
pub const SIZE_UNITS: &[&str] = &["bytes", "Kb", "Mb", "Gb", "Tb"];
pub const LOG_ALLOCATIONS_DEFAULT: bool = false;

/// Log target of the per-allocation lines; enabled at `trace` by default.
pub const ALLOCATION_LOG_TARGET: &str = "entity_store::allocations";
