//! Labels of the three linguistic variables and their fixed breakpoints.

use std::fmt;

use fixed_map::Key;
use serde::Serialize;

use crate::math::Trapezoid;
use crate::terms::Terms;

/// Soil pH labels.
#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Acidity {
    Acidic,
    Neutral,
    Alkaline,
}

/// Watering frequency labels.
#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Watering {
    Low,
    Medium,
    High,
}

/// Recommended plant labels, ordered along the plant-score axis.
#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    Cactus,
    Rosebush,
    Fern,
}

impl Acidity {
    pub const ALL: [Acidity; 3] = [Self::Acidic, Self::Neutral, Self::Alkaline];

    pub fn breakpoints(self) -> [f64; 4] {
        match self {
            Self::Acidic => [0., 0., 4.5, 6.5],
            Self::Neutral => [4.5, 6.5, 8., 10.],
            Self::Alkaline => [8., 10., 14., 14.],
        }
    }

    pub fn terms() -> Terms<Self> {
        Self::ALL.into_iter().map(|l| (l, Trapezoid::new(l.breakpoints()))).collect()
    }
}

impl Watering {
    pub const ALL: [Watering; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn breakpoints(self) -> [f64; 4] {
        match self {
            Self::Low => [0., 0., 3., 4.5],
            Self::Medium => [3., 4.5, 6., 7.],
            Self::High => [6., 7., 10., 10.],
        }
    }

    pub fn terms() -> Terms<Self> {
        Self::ALL.into_iter().map(|l| (l, Trapezoid::new(l.breakpoints()))).collect()
    }
}

impl PlantType {
    pub const ALL: [PlantType; 3] = [Self::Cactus, Self::Rosebush, Self::Fern];

    pub fn breakpoints(self) -> [f64; 4] {
        match self {
            Self::Cactus => [0., 0., 0.7, 1.5],
            Self::Rosebush => [1., 1.5, 2.2, 3.3],
            Self::Fern => [2.5, 3.3, 4., 4.5],
        }
    }

    pub fn terms() -> Terms<Self> {
        Self::ALL.into_iter().map(|l| (l, Trapezoid::new(l.breakpoints()))).collect()
    }

    /// Maps a crisp plant score to its display label. Thresholds are
    /// half-open: `[.., 1.5)` cactus, `[1.5, 3)` rosebush, `[3, ..)` fern.
    pub fn from_score(score: f64) -> Self {
        if score < 1.5 {
            Self::Cactus
        } else if score < 3. {
            Self::Rosebush
        } else {
            Self::Fern
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cactus => "cactus",
            Self::Rosebush => "rosebush",
            Self::Fern => "fern",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Cactus => "Los cactus son ideales para suelos alcalinos con baja frecuencia de riego.",
            Self::Rosebush => "Los rosales prefieren suelos neutros con frecuencia de riego media.",
            Self::Fern => "Los helechos prosperan en suelos ácidos con alta frecuencia de riego.",
        }
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every label of every variable, so the three can share one variable store.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Label {
    Acidity(Acidity),
    Watering(Watering),
    Plant(PlantType),
}

impl From<Acidity> for Label {
    fn from(a: Acidity) -> Self {
        Self::Acidity(a)
    }
}

impl From<Watering> for Label {
    fn from(w: Watering) -> Self {
        Self::Watering(w)
    }
}

impl From<PlantType> for Label {
    fn from(p: PlantType) -> Self {
        Self::Plant(p)
    }
}
