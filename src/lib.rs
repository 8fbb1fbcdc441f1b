//! Plant nutrient diagnosis and plant recommendation.
//!
//! Two small inference engines share this crate:
//!
//! - a forward-chaining rule engine ([`engine`]) that derives nutrient
//!   deficiencies and their treatments from observed symptoms, and
//! - a Mamdani fuzzy system ([`model`]) that maps soil pH and watering
//!   frequency to a plant score and label.
//!
//! [`PlantExpert`] is the entry point for front ends.

pub mod arange;
pub mod config;
pub mod dsl;
pub mod engine;
pub mod error;
pub mod expert;
pub mod facts;
pub mod inference;
pub mod inputs;
pub mod labels;
pub mod math;
pub mod model;
pub mod ops;
pub mod outputs;
pub mod rules;
pub mod symptoms;
pub mod terms;
pub mod variable;

pub use config::{ExpertConfig, FuzzyConfig};
pub use error::{ConfigError, DiagnosisError, ExpertError, FuzzyError};
pub use expert::{Diagnosis, PlantExpert};
pub use facts::{Deficiency, Fact, FactKind, FactStore, Treatment};
pub use labels::{Acidity, PlantType, Watering};
pub use model::PlantModel;
pub use outputs::{OutputProfile, Recommendation, RuleStrengths};
pub use symptoms::{Category, Characteristic, Symptom};
