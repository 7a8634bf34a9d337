// src/layout/registry.rs
//! Data-driven island layouts + loader for `.islands.ron` files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::boundary::{default_margin, default_scale_factor, BoundaryConfig};
use super::core::Point2D;
use super::placement::{generate_batch, generate_for_identity};
use super::presets::Preset;

// ---------- Boundary source (data form) ----------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BoundarySource {
    /// Explicit shape and margin.
    Shape(BoundaryConfig),
    /// One of the built-in custom outlines.
    Preset {
        preset: Preset,
        #[serde(default = "default_scale_factor")]
        scale_factor: f64,
        #[serde(default = "default_margin")]
        margin: f64,
    },
}

impl BoundarySource {
    pub fn to_config(&self) -> BoundaryConfig {
        match self {
            BoundarySource::Shape(cfg) => cfg.clone(),
            BoundarySource::Preset { preset, scale_factor, margin } => {
                preset.boundary(*scale_factor).with_margin(*margin)
            }
        }
    }
}

// ---------- Island definition (data form) ----------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IslandDef {
    /// Unique name; also the container id for identity placement.
    pub name: String,

    pub boundary: BoundarySource,

    /// Radius for identity draws (and batch draws when no boundary applies).
    #[serde(default = "default_nominal_radius")]
    pub nominal_radius: f64,

    /// Spacing between trees in a batch layout.
    #[serde(default = "default_min_distance")]
    pub min_distance: f64,
}

fn default_nominal_radius() -> f64 {
    15.0
}
fn default_min_distance() -> f64 {
    1.5
}

// ---------- Runtime layout ----------

/// An island with its boundary resolved, ready to place trees.
#[derive(Clone, Debug, PartialEq)]
pub struct IslandLayout {
    pub name: String,
    pub boundary: BoundaryConfig,
    pub nominal_radius: f64,
    pub min_distance: f64,
}

impl IslandLayout {
    pub fn from_def(def: &IslandDef) -> Self {
        Self {
            name: def.name.clone(),
            boundary: def.boundary.to_config(),
            nominal_radius: def.nominal_radius,
            min_distance: def.min_distance,
        }
    }

    /// Seeded batch of up to `count` spaced points.
    pub fn batch(&self, count: usize, seed: u64) -> Vec<Point2D> {
        generate_batch(count, self.nominal_radius, self.min_distance, seed, Some(&self.boundary))
    }

    /// Stable point for `entity_id` on this island (the island name is the container).
    pub fn position_for(&self, entity_id: &str) -> Point2D {
        generate_for_identity(entity_id, &self.name, self.nominal_radius, Some(&self.boundary))
    }
}

// ---------- Registry ----------

#[derive(Clone, Debug, Default)]
pub struct IslandRegistry {
    /// Ordered list; index in this vector is stable for the registry's lifetime.
    pub islands: Vec<IslandLayout>,
    /// Name → index for quick lookups.
    pub name_to_index: HashMap<String, u32>,
}

impl IslandRegistry {
    pub fn from_defs(defs: Vec<IslandDef>) -> Result<Self, RegistryLoadError> {
        let mut name_to_index = HashMap::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            if let Some(prev) = name_to_index.insert(def.name.clone(), i as u32) {
                return Err(RegistryLoadError::DuplicateName {
                    name: def.name.clone(),
                    first: prev,
                    second: i as u32,
                });
            }
        }

        let islands = defs.iter().map(IslandLayout::from_def).collect();
        Ok(Self { islands, name_to_index })
    }

    pub fn from_ron_str(src: &str) -> Result<Self, RegistryLoadError> {
        let defs: Vec<IslandDef> =
            ron::from_str(src).map_err(|e| RegistryLoadError::Ron(e.to_string()))?;
        let registry = Self::from_defs(defs)?;
        debug!(islands = registry.len(), "island registry loaded");
        Ok(registry)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RegistryLoadError> {
        let defs: Vec<IslandDef> =
            ron::de::from_bytes(bytes).map_err(|e| RegistryLoadError::Ron(e.to_string()))?;
        let registry = Self::from_defs(defs)?;
        debug!(islands = registry.len(), "island registry loaded");
        Ok(registry)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryLoadError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.name_to_index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&IslandLayout> {
        self.index_of(name).and_then(|i| self.by_index(i))
    }

    pub fn by_index(&self, index: u32) -> Option<&IslandLayout> {
        self.islands.get(index as usize)
    }

    pub fn len(&self) -> usize {
        self.islands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IslandLayout> {
        self.islands.iter()
    }
}

// ---------- Loader errors ----------

#[derive(thiserror::Error, Debug)]
pub enum RegistryLoadError {
    #[error("I/O while reading island registry: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
    #[error("Duplicate island name '{name}' (first idx {first}, second idx {second})")]
    DuplicateName { name: String, first: u32, second: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str) -> IslandDef {
        IslandDef {
            name: name.to_string(),
            boundary: BoundarySource::Shape(BoundaryConfig::circle(15.0)),
            nominal_radius: 15.0,
            min_distance: 1.5,
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = IslandRegistry::from_defs(vec![def("a"), def("b"), def("a")]).unwrap_err();
        match err {
            RegistryLoadError::DuplicateName { name, first, second } => {
                assert_eq!(name, "a");
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn preset_source_resolves_to_custom_boundary() {
        let src = BoundarySource::Preset { preset: Preset::Leaf, scale_factor: 10.0, margin: 0.5 };
        let cfg = src.to_config();
        assert_eq!(cfg, Preset::Leaf.boundary(10.0).with_margin(0.5));
    }

    #[test]
    fn lookup_by_name_and_index() {
        let reg = IslandRegistry::from_defs(vec![def("north"), def("south")]).unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.index_of("south"), Some(1));
        assert_eq!(reg.get("north").map(|l| l.name.as_str()), Some("north"));
        assert!(reg.get("east").is_none());
        assert!(reg.by_index(7).is_none());
    }
}
