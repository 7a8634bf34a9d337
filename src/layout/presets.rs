// src/layout/presets.rs
//! Built-in custom island outlines (normalized; roughly within [-0.8, 0.8]).

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layout::boundary::BoundaryConfig;
use crate::layout::core::Point2D;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Heart,
    Star,
    Circle,
    Paw,
    Crescent,
    Butterfly,
    Flower,
    Leaf,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown island preset '{0}'")]
pub struct UnknownPreset(pub String);

#[rustfmt::skip]
const HEART: &[(f64, f64)] = &[
    (0.0, 0.3), (-0.3, 0.6), (-0.6, 0.5), (-0.7, 0.2), (-0.6, -0.1),
    (0.0, -0.8), (0.6, -0.1), (0.7, 0.2), (0.6, 0.5), (0.3, 0.6),
];

#[rustfmt::skip]
const STAR: &[(f64, f64)] = &[
    (0.0, 0.8), (0.2, 0.25), (0.75, 0.25), (0.3, -0.15), (0.5, -0.7),
    (0.0, -0.35), (-0.5, -0.7), (-0.3, -0.15), (-0.75, 0.25), (-0.2, 0.25),
];

#[rustfmt::skip]
const PAW: &[(f64, f64)] = &[
    // pad
    (0.0, 0.2), (-0.3, 0.3), (-0.4, 0.1), (-0.3, -0.2), (0.0, -0.4),
    (0.3, -0.2), (0.4, 0.1), (0.3, 0.3),
    // toes
    (0.1, 0.5), (-0.2, 0.7), (-0.4, 0.6), (-0.5, 0.4), (-0.4, 0.3),
    (-0.3, 0.5), (-0.1, 0.8), (0.1, 0.8), (0.3, 0.5),
    (0.4, 0.4), (0.5, 0.4), (0.6, 0.6), (0.4, 0.7), (0.2, 0.5),
];

#[rustfmt::skip]
const BUTTERFLY: &[(f64, f64)] = &[
    (0.0, 0.0), (-0.3, 0.3), (-0.6, 0.5), (-0.7, 0.3), (-0.6, 0.1),
    (-0.7, -0.1), (-0.6, -0.4), (-0.3, -0.3), (0.0, -0.1),
    (0.3, -0.3), (0.6, -0.4), (0.7, -0.1),
    (0.6, 0.1), (0.7, 0.3), (0.6, 0.5), (0.3, 0.3),
];

#[rustfmt::skip]
const LEAF: &[(f64, f64)] = &[
    (0.0, 0.8), (0.2, 0.6), (0.4, 0.3), (0.5, 0.0), (0.4, -0.3), (0.2, -0.6),
    (0.0, -0.8), (-0.2, -0.6), (-0.4, -0.3), (-0.5, 0.0), (-0.4, 0.3), (-0.2, 0.6),
];

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Heart,
        Preset::Star,
        Preset::Circle,
        Preset::Paw,
        Preset::Crescent,
        Preset::Butterfly,
        Preset::Flower,
        Preset::Leaf,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Preset::Heart => "heart",
            Preset::Star => "star",
            Preset::Circle => "circle",
            Preset::Paw => "paw",
            Preset::Crescent => "crescent",
            Preset::Butterfly => "butterfly",
            Preset::Flower => "flower",
            Preset::Leaf => "leaf",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Heart => "Romantic heart-shaped island",
            Preset::Star => "Five-pointed star island",
            Preset::Circle => "Classic round island",
            Preset::Paw => "Cat paw pad with toes",
            Preset::Crescent => "Crescent moon island",
            Preset::Butterfly => "Butterfly with spread wings",
            Preset::Flower => "Six-petal flower island",
            Preset::Leaf => "Pointed leaf outline",
        }
    }

    /// Normalized outline vertices, in order.
    pub fn points(self) -> Vec<Point2D> {
        match self {
            Preset::Heart => from_table(HEART),
            Preset::Star => from_table(STAR),
            Preset::Paw => from_table(PAW),
            Preset::Butterfly => from_table(BUTTERFLY),
            Preset::Leaf => from_table(LEAF),
            Preset::Circle => (0..32)
                .map(|i| Point2D::from_polar(f64::from(i) / 32.0 * TAU, 0.7))
                .collect(),
            Preset::Crescent => (0..24)
                .map(|i| {
                    if i < 12 {
                        let angle = f64::from(i) / 24.0 * PI * 1.5 - PI * 0.25;
                        Point2D::from_polar(angle, 0.7)
                    } else {
                        let angle = f64::from(23 - i) / 24.0 * PI * 1.5 - PI * 0.25;
                        let p = Point2D::from_polar(angle, 0.5);
                        Point2D::new(p.x + 0.15, p.z)
                    }
                })
                .collect(),
            Preset::Flower => (0..40)
                .map(|i| {
                    let angle = f64::from(i) / 40.0 * TAU;
                    let radius = 0.5 + (angle * 6.0).cos() * 0.3;
                    Point2D::from_polar(angle, radius)
                })
                .collect(),
        }
    }

    /// Custom boundary for this outline with the default margin.
    pub fn boundary(self, scale_factor: f64) -> BoundaryConfig {
        BoundaryConfig::custom(self.points(), scale_factor)
    }
}

fn from_table(table: &[(f64, f64)]) -> Vec<Point2D> {
    table.iter().copied().map(Point2D::from).collect()
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
