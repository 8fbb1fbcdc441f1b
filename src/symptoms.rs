//! The enumerated symptom domain: four categories, each with a fixed set
//! of observable characteristics.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{DiagnosisError, DiagnosisResult};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Category {
    #[serde(rename = "Leaf color")]
    LeafColor,
    #[serde(rename = "Leaf condition")]
    LeafCondition,
    #[serde(rename = "Stem condition")]
    StemCondition,
    #[serde(rename = "Growth and development")]
    GrowthAndDevelopment,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Self::LeafColor,
        Self::LeafCondition,
        Self::StemCondition,
        Self::GrowthAndDevelopment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::LeafColor => "Leaf color",
            Self::LeafCondition => "Leaf condition",
            Self::StemCondition => "Stem condition",
            Self::GrowthAndDevelopment => "Growth and development",
        }
    }

    /// The characteristics a symptom of this category may take.
    pub fn options(self) -> &'static [Characteristic] {
        use Characteristic::*;

        match self {
            Self::LeafColor => &[PaleGreen, UniformYellow, PurpleOrReddish, DryBurntEdges],
            Self::LeafCondition => &[Wilted, StuntedGrowth],
            Self::StemCondition => &[WeakOrBrittle, Thickened],
            Self::GrowthAndDevelopment => &[LateMaturation, AbsentFlowering],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = DiagnosisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DiagnosisError::InvalidCategory {
                category: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Characteristic {
    #[serde(rename = "pale green")]
    PaleGreen,
    #[serde(rename = "uniform yellow")]
    UniformYellow,
    #[serde(rename = "purple or reddish")]
    PurpleOrReddish,
    #[serde(rename = "dry/burnt edges")]
    DryBurntEdges,
    Wilted,
    #[serde(rename = "stunted growth")]
    StuntedGrowth,
    #[serde(rename = "weak or brittle")]
    WeakOrBrittle,
    Thickened,
    #[serde(rename = "late maturation")]
    LateMaturation,
    #[serde(rename = "absent flowering")]
    AbsentFlowering,
}

impl Characteristic {
    pub fn name(self) -> &'static str {
        match self {
            Self::PaleGreen => "pale green",
            Self::UniformYellow => "uniform yellow",
            Self::PurpleOrReddish => "purple or reddish",
            Self::DryBurntEdges => "dry/burnt edges",
            Self::Wilted => "wilted",
            Self::StuntedGrowth => "stunted growth",
            Self::WeakOrBrittle => "weak or brittle",
            Self::Thickened => "thickened",
            Self::LateMaturation => "late maturation",
            Self::AbsentFlowering => "absent flowering",
        }
    }

    /// Every characteristic belongs to exactly one category.
    pub const fn category(self) -> Category {
        match self {
            Self::PaleGreen | Self::UniformYellow | Self::PurpleOrReddish | Self::DryBurntEdges => {
                Category::LeafColor
            },
            Self::Wilted | Self::StuntedGrowth => Category::LeafCondition,
            Self::WeakOrBrittle | Self::Thickened => Category::StemCondition,
            Self::LateMaturation | Self::AbsentFlowering => Category::GrowthAndDevelopment,
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An observed symptom. Only constructible with a characteristic that
/// belongs to its category.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Symptom {
    category: Category,
    characteristic: Characteristic,
}

impl Symptom {
    pub const fn new(characteristic: Characteristic) -> Self {
        Self {
            category: characteristic.category(),
            characteristic,
        }
    }

    /// Validates a `(category, characteristic)` pair of display strings.
    pub fn parse(category: &str, characteristic: &str) -> DiagnosisResult<Self> {
        let parsed_category: Category = category.parse()?;
        let wanted = characteristic.trim();

        parsed_category
            .options()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .map(Self::new)
            .ok_or_else(|| DiagnosisError::InvalidCharacteristic {
                category: parsed_category.name().to_string(),
                characteristic: wanted.to_string(),
            })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn characteristic(&self) -> Characteristic {
        self.characteristic
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.characteristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_belong_to_their_category() {
        for category in Category::ALL {
            for option in category.options() {
                assert_eq!(option.category(), category);
            }
        }
    }

    #[test]
    fn test_parse_is_trimmed_and_case_insensitive() {
        let symptom = Symptom::parse("  leaf COLOR ", "Pale Green").unwrap();

        assert_eq!(symptom, Symptom::new(Characteristic::PaleGreen));
        assert_eq!(symptom.category(), Category::LeafColor);
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        assert_eq!(
            Symptom::parse("Root color", "pale green"),
            Err(DiagnosisError::InvalidCategory {
                category: "Root color".into()
            })
        );
    }

    #[test]
    fn test_parse_rejects_characteristic_from_other_category() {
        assert_eq!(
            Symptom::parse("Leaf condition", "pale green"),
            Err(DiagnosisError::InvalidCharacteristic {
                category: "Leaf condition".into(),
                characteristic: "pale green".into(),
            })
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let symptom = Symptom::new(Characteristic::DryBurntEdges);

        assert_eq!(symptom.to_string(), "Leaf color: dry/burnt edges");
        assert_eq!(
            Symptom::parse(symptom.category().name(), symptom.characteristic().name()),
            Ok(symptom)
        );
    }
}
