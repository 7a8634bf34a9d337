pub mod boundary;
pub mod core;
pub mod placement;
pub mod presets;
pub mod registry;
