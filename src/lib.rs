// src/lib.rs
//! Deterministic placement of decorative props (trees, flowers) on island footprints.
//!
//! Two entry points:
//! - [`generate_batch`]: N mutually spaced points inside a boundary, reproducible per seed.
//! - [`generate_for_identity`]: one stable point per `(entity, container)` pair, so
//!   positions never need to be stored.

pub mod layout;

pub use layout::boundary::{BoundaryConfig, IslandShape, Region};
pub use layout::core::{LayoutBounds, Point2D};
pub use layout::placement::{generate_batch, generate_for_identity, identity_seed};
pub use layout::presets::Preset;
pub use layout::registry::{IslandLayout, IslandRegistry, RegistryLoadError};
