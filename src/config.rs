//! TOML configuration.
//!
//! Every key is optional; an empty file yields the standard model.
//!
//! ```toml
//! [fuzzy]
//! step = 0.1
//! and_op = "min"
//! or_op = "max"
//! implication = "min"
//! aggregation = "max"
//! defuzzification = "centroid"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::arange::Arange;
use crate::error::{ConfigError, ConfigResult};
use crate::inference::InferenceOps;
use crate::ops::{AndOp, DefuzzificationOp, ImplicationOp, OrOp, ProductionLink};
use crate::model::{ACIDITY_DOMAIN, PLANT_DOMAIN, WATERING_DOMAIN};
use crate::variable::{DEFAULT_STEP, MAX_STEP};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExpertConfig {
    pub fuzzy: FuzzyConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FuzzyConfig {
    /// Sample step of every universe.
    pub step: f64,
    pub and_op: AndOp,
    pub or_op: OrOp,
    pub implication: ImplicationOp,
    pub aggregation: ProductionLink,
    pub defuzzification: DefuzzificationOp,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        let ops = InferenceOps::default();

        Self {
            step: DEFAULT_STEP,
            and_op: ops.and_op,
            or_op: ops.or_op,
            implication: ops.implication,
            aggregation: ops.aggregation,
            defuzzification: ops.defuzzification,
        }
    }
}

impl FuzzyConfig {
    pub fn ops(&self) -> InferenceOps {
        InferenceOps {
            and_op: self.and_op,
            or_op: self.or_op,
            implication: self.implication,
            aggregation: self.aggregation,
            defuzzification: self.defuzzification,
        }
    }

    /// The step must lie in `(0, MAX_STEP]` and keep every universe within
    /// [`Arange::MAX_LEN`] samples.
    pub fn validate(&self) -> ConfigResult<()> {
        let step = self.step;
        let in_bounds = step.is_finite() && step > 0. && step <= MAX_STEP;
        let sized = [ACIDITY_DOMAIN, WATERING_DOMAIN, PLANT_DOMAIN]
            .iter()
            .all(|domain| Arange::sample_count(*domain.start(), *domain.end(), step).is_some());

        if in_bounds && sized {
            Ok(())
        } else {
            Err(ConfigError::InvalidStep { step })
        }
    }
}

impl ExpertConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

        config.fuzzy.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ExpertConfig::from_toml_str("").unwrap();

        assert_eq!(config, ExpertConfig::default());
        assert_eq!(config.fuzzy.step, 0.1);
        assert_eq!(config.fuzzy.ops(), InferenceOps::default());
    }

    #[test]
    fn test_parse_operators() {
        let config = ExpertConfig::from_toml_str(
            r#"
            [fuzzy]
            step = 0.05
            and_op = "prod"
            implication = "prod"
            aggregation = "bounded_sum"
            defuzzification = "mom"
            "#,
        )
        .unwrap();

        assert_eq!(config.fuzzy.step, 0.05);
        assert_eq!(config.fuzzy.and_op, AndOp::Prod);
        assert_eq!(config.fuzzy.implication, ImplicationOp::Prod);
        assert_eq!(config.fuzzy.aggregation, ProductionLink::BoundedSum);
        assert_eq!(config.fuzzy.defuzzification, DefuzzificationOp::Mom);
    }

    #[test]
    fn test_rejects_bad_step() {
        let err = ExpertConfig::from_toml_str("[fuzzy]\nstep = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStep { .. }));

        let err = ExpertConfig::from_toml_str("[fuzzy]\nstep = -0.1\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStep { .. }));
    }

    #[test]
    fn test_rejects_step_too_fine() {
        let err = ExpertConfig::from_toml_str("[fuzzy]\nstep = 1e-300\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStep { .. }));

        let err = ExpertConfig::from_toml_str("[fuzzy]\nstep = 0.0001\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStep { .. }));
    }

    #[test]
    fn test_rejects_step_too_coarse() {
        let err = ExpertConfig::from_toml_str("[fuzzy]\nstep = 20.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStep { step } if step == 20.));

        let err = ExpertConfig::from_toml_str("[fuzzy]\nstep = inf\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStep { .. }));
    }

    #[test]
    fn test_step_bounds_are_inclusive() {
        assert!(ExpertConfig::from_toml_str("[fuzzy]\nstep = 1.0\n").is_ok());
        assert!(ExpertConfig::from_toml_str("[fuzzy]\nstep = 0.001\n").is_ok());
    }

    #[test]
    fn test_rejects_unknown_operator() {
        let err = ExpertConfig::from_toml_str("[fuzzy]\nand_op = \"avg\"\n").unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("plant-expert.toml");
        std::fs::write(&path, "[fuzzy]\ndefuzzification = \"bisector\"\n").unwrap();

        let config = ExpertConfig::load(&path).unwrap();

        assert_eq!(config.fuzzy.defuzzification, DefuzzificationOp::Bisector);
        assert_eq!(config.fuzzy.step, 0.1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();

        let err = ExpertConfig::load(&dir.path().join("absent.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
