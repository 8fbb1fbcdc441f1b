//! The fuzzy plant recommender.
//!
//! A [`PlantModel`] is built once and never mutated afterwards, so one
//! instance can back any number of concurrent recommendations behind an
//! `Arc`. Each call is a pure function of its two crisp inputs.

use std::ops::RangeInclusive;

use crate::config::FuzzyConfig;
use crate::error::{ConfigResult, FuzzyError, FuzzyResult};
use crate::inference::{InferenceOps, MamdaniInference};
use crate::inputs::Inputs;
use crate::labels::{Acidity, Label, PlantType, Watering};
use crate::outputs::{OutputProfile, Outputs, Recommendation, RuleStrengths};
use crate::rules::{Rules, DECISION_TABLE};
use crate::variable::{LinguisticVariable, Variable, Variables, DEFAULT_STEP};

pub const ACIDITY_DOMAIN: RangeInclusive<f64> = 0. ..=14.;
pub const WATERING_DOMAIN: RangeInclusive<f64> = 0. ..=10.;
pub const PLANT_DOMAIN: RangeInclusive<f64> = 0. ..=5.;

pub struct PlantModel {
    vars: Variables<Label>,
    acidity: Variable<Acidity>,
    watering: Variable<Watering>,
    plant: Variable<PlantType>,
    rules: Rules<Label>,
    inference: MamdaniInference,
}

impl Default for PlantModel {
    fn default() -> Self {
        Self::build(DEFAULT_STEP, InferenceOps::default())
    }
}

impl PlantModel {
    /// The standard model: 0.1 step, Mamdani min/max with centroid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FuzzyConfig) -> ConfigResult<Self> {
        config.validate()?;

        Ok(Self::build(config.step, config.ops()))
    }

    fn build(step: f64, ops: InferenceOps) -> Self {
        let mut vars = Variables::new();
        let acidity = vars.add("acidity", ACIDITY_DOMAIN, Acidity::terms(), Some(step));
        let watering = vars.add("watering", WATERING_DOMAIN, Watering::terms(), Some(step));
        let plant = vars.add("plant", PLANT_DOMAIN, PlantType::terms(), Some(step));

        let mut rules = Rules::with_capacity(DECISION_TABLE.len());

        for (a, w, p) in DECISION_TABLE {
            rules.add(acidity.is(a).and(watering.is(w)), plant.is(p));
        }

        tracing::debug!(step, rules = rules.len(), "built fuzzy plant model");

        Self {
            vars,
            acidity,
            watering,
            plant,
            rules,
            inference: MamdaniInference::new(ops),
        }
    }

    pub fn acidity(&self) -> Variable<Acidity> {
        self.acidity
    }

    pub fn watering(&self) -> Variable<Watering> {
        self.watering
    }

    pub fn plant(&self) -> Variable<PlantType> {
        self.plant
    }

    pub fn variable<I>(&self, var: Variable<I>) -> Option<&LinguisticVariable<Label>> {
        self.vars.get(var)
    }

    pub fn rules(&self) -> &Rules<Label> {
        &self.rules
    }

    /// Degree of `x` in `label` of `var`. `x` is clamped to the variable's
    /// domain; callers validate the domain themselves.
    pub fn membership<I: Into<Label>>(&self, var: Variable<I>, label: I, x: f64) -> f64 {
        self.vars
            .get(var)
            .map_or(0., |v| v.membership(&label.into(), x))
    }

    /// Per-plant rule strengths for one pair of inputs.
    pub fn evaluate(&self, acidity: f64, watering: f64) -> FuzzyResult<RuleStrengths> {
        check_range("acidity", acidity, ACIDITY_DOMAIN)?;
        check_range("watering", watering, WATERING_DOMAIN)?;

        let mut inputs = Inputs::new();
        inputs.add(self.acidity, acidity);
        inputs.add(self.watering, watering);

        let outputs = self.inference.evaluate(&self.vars, &self.rules, &inputs)?;

        Ok(PlantType::ALL
            .into_iter()
            .map(|p| (p, outputs.strength(self.plant, p)))
            .collect())
    }

    /// The combined output membership for `strengths`.
    pub fn profile(&self, strengths: &RuleStrengths) -> OutputProfile {
        let outputs = Outputs::new(
            strengths
                .iter()
                .map(|(p, s)| ((self.plant.0, Label::Plant(p)), s))
                .collect(),
        );

        self.inference.aggregate(&self.vars, self.plant, &outputs)
    }

    /// Crisp plant score for `strengths`. Fails if every strength is zero.
    pub fn defuzzify(&self, strengths: &RuleStrengths) -> FuzzyResult<f64> {
        if strengths.is_zero() {
            return Err(FuzzyError::DefuzzificationUndefined);
        }

        self.inference.defuzzify(&self.profile(strengths))
    }

    pub fn recommend(&self, acidity: f64, watering: f64) -> FuzzyResult<Recommendation> {
        let strengths = self.evaluate(acidity, watering)?;
        let profile = self.profile(&strengths);
        let score = self.inference.defuzzify(&profile)?;
        let label = PlantType::from_score(score);

        tracing::debug!(acidity, watering, score, label = %label, "recommendation");

        Ok(Recommendation {
            score,
            label,
            description: label.description(),
            strengths,
            profile,
        })
    }
}

fn check_range(field: &'static str, value: f64, range: RangeInclusive<f64>) -> FuzzyResult<()> {
    // NaN fails `contains`, so it is rejected here too
    if range.contains(&value) {
        Ok(())
    } else {
        Err(FuzzyError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_corner_cells() {
        let model = PlantModel::new();

        let cactus = model.recommend(12., 1.).unwrap();
        assert_eq!(cactus.label, PlantType::Cactus);
        assert!((cactus.score - 0.5478260869565217).abs() < EPS);

        let fern = model.recommend(1., 9.).unwrap();
        assert_eq!(fern.label, PlantType::Fern);
        assert!((fern.score - 3.5629629629629624).abs() < EPS);
    }

    #[test]
    fn test_neutral_medium_is_rosebush() {
        let rec = PlantModel::new().recommend(7., 5.).unwrap();

        assert_eq!(rec.label, PlantType::Rosebush);
        assert!(rec.score > 1.5 && rec.score < 3.);
        assert!((rec.score - 2.026666666666667).abs() < EPS);
        assert_eq!(rec.strengths.get(PlantType::Rosebush), 1.);
        assert_eq!(rec.strengths.get(PlantType::Cactus), 0.);
        assert_eq!(rec.strengths.get(PlantType::Fern), 0.);
    }

    #[test]
    fn test_blended_strengths() {
        let model = PlantModel::new();
        let strengths = model.evaluate(9., 1.).unwrap();

        // alkaline(9) = neutral(9) = 0.5 under low watering
        assert_eq!(strengths.get(PlantType::Cactus), 0.5);
        assert_eq!(strengths.get(PlantType::Rosebush), 0.5);
        assert_eq!(strengths.get(PlantType::Fern), 0.);
        assert!((model.defuzzify(&strengths).unwrap() - 1.492435973793925).abs() < EPS);
    }

    #[test]
    fn test_out_of_range() {
        let model = PlantModel::new();

        assert!(matches!(
            model.evaluate(-1., 5.),
            Err(FuzzyError::OutOfRange { field: "acidity", .. })
        ));
        assert!(matches!(
            model.recommend(7., 11.),
            Err(FuzzyError::OutOfRange { field: "watering", .. })
        ));
        assert!(matches!(
            model.recommend(f64::NAN, 5.),
            Err(FuzzyError::OutOfRange { field: "acidity", .. })
        ));
    }

    #[test]
    fn test_domain_bounds_are_inclusive() {
        let model = PlantModel::new();

        assert_eq!(model.recommend(14., 0.).unwrap().label, PlantType::Cactus);
        assert_eq!(model.recommend(0., 10.).unwrap().label, PlantType::Fern);
        assert_eq!(model.recommend(0., 0.).unwrap().label, PlantType::Rosebush);
    }

    #[test]
    fn test_defuzzify_all_zero() {
        let model = PlantModel::new();

        assert_eq!(
            model.defuzzify(&RuleStrengths::new()),
            Err(FuzzyError::DefuzzificationUndefined)
        );
    }

    #[test]
    fn test_from_config_rejects_unsampleable_step() {
        for step in [1e-300, 1e-5, 20.] {
            let config = FuzzyConfig {
                step,
                ..FuzzyConfig::default()
            };

            assert!(
                matches!(PlantModel::from_config(&config), Err(ConfigError::InvalidStep { .. })),
                "step {step}"
            );
        }
    }

    #[test]
    fn test_coarsest_step_defuzzifies_everywhere() {
        let config = FuzzyConfig {
            step: 1.,
            ..FuzzyConfig::default()
        };
        let model = PlantModel::from_config(&config).unwrap();

        assert_eq!(model.profile(&RuleStrengths::new()).universe, vec![0., 1., 2., 3., 4.]);

        for ph in 0..=28 {
            for w in 0..=20 {
                let (ph, w) = (ph as f64 * 0.5, w as f64 * 0.5);
                assert!(model.recommend(ph, w).is_ok(), "({ph}, {w})");
            }
        }
    }

    #[test]
    fn test_membership_overlap() {
        let model = PlantModel::new();
        let acidity = model.acidity();

        assert_eq!(model.membership(acidity, Acidity::Acidic, 6.5), 0.);
        assert_eq!(model.membership(acidity, Acidity::Neutral, 6.5), 1.);
        assert_eq!(model.membership(acidity, Acidity::Acidic, 5.5), 0.5);
        assert_eq!(model.membership(acidity, Acidity::Neutral, 5.5), 0.5);
    }

    #[test]
    fn test_membership_is_continuous() {
        let model = PlantModel::new();
        // The steepest edges rise by 1 over 0.5 (rosebush 1..1.5, fern
        // 4..4.5), so a 0.01 step can move a degree by at most 0.02.
        let h = 0.01;

        for label in Acidity::ALL {
            for i in 0..1400 {
                let x = i as f64 * h;
                let jump = (model.membership(model.acidity(), label, x + h)
                    - model.membership(model.acidity(), label, x))
                .abs();
                assert!(jump <= 0.02 + EPS, "{label:?} at {x}");
            }
        }
        for label in Watering::ALL {
            for i in 0..1000 {
                let x = i as f64 * h;
                let jump = (model.membership(model.watering(), label, x + h)
                    - model.membership(model.watering(), label, x))
                .abs();
                assert!(jump <= 0.02 + EPS, "{label:?} at {x}");
            }
        }
        for label in PlantType::ALL {
            for i in 0..500 {
                let x = i as f64 * h;
                let jump = (model.membership(model.plant(), label, x + h)
                    - model.membership(model.plant(), label, x))
                .abs();
                assert!(jump <= 0.02 + EPS, "{label:?} at {x}");
            }
        }
    }
}
