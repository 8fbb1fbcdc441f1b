use std::collections::HashMap;
use std::hash::Hash;

use fixed_map::Map as FixedMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::labels::PlantType;
use crate::variable::{Variable, VariableKey};

/// Aggregated firing strength of every consequent label, keyed by the
/// variable it belongs to.
#[derive(Debug)]
pub struct Outputs<T: Eq + Hash> {
    strengths: HashMap<(VariableKey, T), f64>,
}

impl<T: Copy + Eq + Hash> Outputs<T> {
    pub(crate) fn new(strengths: HashMap<(VariableKey, T), f64>) -> Self {
        Self { strengths }
    }

    /// Strength of `label`; labels no rule concluded have strength zero.
    pub fn strength<I: Into<T>>(&self, var: Variable<I>, label: I) -> f64 {
        self.strength_of(var.0, &label.into())
    }

    pub(crate) fn strength_of(&self, key: VariableKey, label: &T) -> f64 {
        self.strengths.get(&(key, *label)).copied().unwrap_or(0.)
    }
}

/// Per-plant strengths, the result of rule evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleStrengths(FixedMap<PlantType, f64>);

impl RuleStrengths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, plant: PlantType, strength: f64) {
        self.0.insert(plant, strength);
    }

    pub fn get(&self, plant: PlantType) -> f64 {
        self.0.get(plant).copied().unwrap_or(0.)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlantType, f64)> + '_ {
        PlantType::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// True when every label has strength zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, s)| s == 0.)
    }
}

impl FromIterator<(PlantType, f64)> for RuleStrengths {
    fn from_iter<T: IntoIterator<Item = (PlantType, f64)>>(iter: T) -> Self {
        let mut strengths = Self::new();

        for (plant, strength) in iter {
            strengths.set(plant, strength);
        }

        strengths
    }
}

impl Serialize for RuleStrengths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PlantType::ALL.len()))?;

        for (plant, strength) in self.iter() {
            map.serialize_entry(plant.name(), &strength)?;
        }

        map.end()
    }
}

/// The combined output membership over the plant-score universe.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OutputProfile {
    pub universe: Vec<f64>,
    pub membership: Vec<f64>,
}

impl OutputProfile {
    pub fn is_zero(&self) -> bool {
        self.membership.iter().all(|m| *m == 0.)
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct Recommendation {
    /// Crisp plant score in `[0, 5)`.
    pub score: f64,
    pub label: PlantType,
    pub description: &'static str,
    pub strengths: RuleStrengths,
    pub profile: OutputProfile,
}
