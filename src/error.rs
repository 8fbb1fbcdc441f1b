//! Diagnostic error types for the diagnosis and recommendation engines.
//!
//! Every failure is a local validation failure detected before any
//! inference runs, so each variant carries enough context for a front end
//! to render a message without re-deriving what went wrong.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type, used by the binary.
#[derive(Debug, Error, Diagnostic)]
pub enum ExpertError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Diagnosis(#[from] DiagnosisError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Fuzzy(#[from] FuzzyError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Diagnosis errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DiagnosisError {
    #[error("unknown symptom category '{category}'")]
    #[diagnostic(
        code(plant::diagnosis::invalid_category),
        help(
            "Valid categories are: Leaf color, Leaf condition, Stem condition, \
             Growth and development."
        )
    )]
    InvalidCategory { category: String },

    #[error("'{characteristic}' is not an option of category '{category}'")]
    #[diagnostic(
        code(plant::diagnosis::invalid_characteristic),
        help("Run `plant-expert symptoms` to list the options of each category.")
    )]
    InvalidCharacteristic {
        category: String,
        characteristic: String,
    },

    #[error("no symptoms were provided")]
    #[diagnostic(
        code(plant::diagnosis::empty_symptom_set),
        help("Select at least one symptom to run a diagnosis.")
    )]
    EmptySymptomSet,
}

// ---------------------------------------------------------------------------
// Fuzzy errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum FuzzyError {
    #[error("{field} = {value} is outside the valid range [{min}, {max}]")]
    #[diagnostic(
        code(plant::fuzzy::out_of_range),
        help("Soil pH must lie in [0, 14] and watering frequency in [0, 10].")
    )]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("the aggregated output membership is zero everywhere")]
    #[diagnostic(
        code(plant::fuzzy::defuzzification_undefined),
        help("No rule fired for these inputs, so there is no centroid to compute.")
    )]
    DefuzzificationUndefined,

    #[error("rule premise references variable '{variable}' which has no input")]
    #[diagnostic(
        code(plant::fuzzy::missing_input),
        help("Add a crisp value for every variable used in a rule premise.")
    )]
    MissingInput { variable: String },
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    #[diagnostic(
        code(plant::config::read),
        help("Check that the file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    #[diagnostic(
        code(plant::config::parse),
        help("The config is TOML with an optional [fuzzy] table; unknown keys are rejected.")
    )]
    Parse { path: String, message: String },

    #[error("universe step must lie in (0, 1] and yield at most 100000 samples, got {step}")]
    #[diagnostic(code(plant::config::invalid_step), help("The default step is 0.1."))]
    InvalidStep { step: f64 },
}

pub type DiagnosisResult<T> = std::result::Result<T, DiagnosisError>;

pub type FuzzyResult<T> = std::result::Result<T, FuzzyError>;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

pub type ExpertResult<T> = std::result::Result<T, ExpertError>;
