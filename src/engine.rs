//! Forward-chaining rule engine.
//!
//! Rules are static data: each diagnosis rule carries a trigger list that
//! is OR-combined against the asserted symptoms, and each treatment rule
//! fires off the diagnosis of its deficiency. The engine applies every rule
//! once per pass against the facts present at the start of the pass and
//! stops at the first pass that adds nothing.

use crate::facts::{Deficiency, Fact, FactStore, Treatment};
use crate::symptoms::{Characteristic, Symptom};

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// Symptom → diagnosis.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosisRule {
    pub name: &'static str,
    pub triggers: &'static [Symptom],
    pub conclusion: Deficiency,
}

impl DiagnosisRule {
    /// Fires if any trigger is an asserted symptom.
    pub fn matches(&self, store: &FactStore) -> bool {
        self.triggers.iter().any(|s| store.symptoms().contains(s))
    }
}

/// Diagnosis → treatment.
#[derive(Clone, Copy, Debug)]
pub struct TreatmentRule {
    pub name: &'static str,
    pub deficiency: Deficiency,
    pub treatment: Treatment,
}

impl TreatmentRule {
    pub fn matches(&self, store: &FactStore) -> bool {
        store.diagnoses().contains(&self.deficiency)
    }
}

pub const DIAGNOSIS_RULES: [DiagnosisRule; 3] = [
    DiagnosisRule {
        name: "nitrogen-deficiency",
        triggers: &[
            Symptom::new(Characteristic::PaleGreen),
            Symptom::new(Characteristic::StuntedGrowth),
        ],
        conclusion: Deficiency::Nitrogen,
    },
    DiagnosisRule {
        name: "potassium-deficiency",
        triggers: &[
            Symptom::new(Characteristic::DryBurntEdges),
            Symptom::new(Characteristic::WeakOrBrittle),
        ],
        conclusion: Deficiency::Potassium,
    },
    DiagnosisRule {
        name: "phosphorus-deficiency",
        triggers: &[
            Symptom::new(Characteristic::PurpleOrReddish),
            Symptom::new(Characteristic::LateMaturation),
        ],
        conclusion: Deficiency::Phosphorus,
    },
];

pub const TREATMENT_RULES: [TreatmentRule; 3] = [
    TreatmentRule {
        name: "nitrogen-treatment",
        deficiency: Deficiency::Nitrogen,
        treatment: Treatment::for_deficiency(Deficiency::Nitrogen),
    },
    TreatmentRule {
        name: "potassium-treatment",
        deficiency: Deficiency::Potassium,
        treatment: Treatment::for_deficiency(Deficiency::Potassium),
    },
    TreatmentRule {
        name: "phosphorus-treatment",
        deficiency: Deficiency::Phosphorus,
        treatment: Treatment::for_deficiency(Deficiency::Phosphorus),
    },
];

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Outcome of [`RuleEngine::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainReport {
    /// Passes that added at least one fact.
    pub passes: usize,
    /// Facts added across all passes.
    pub derived: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct RuleEngine {
    diagnosis_rules: &'static [DiagnosisRule],
    treatment_rules: &'static [TreatmentRule],
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    pub fn new() -> Self {
        Self {
            diagnosis_rules: &DIAGNOSIS_RULES,
            treatment_rules: &TREATMENT_RULES,
        }
    }

    pub fn diagnosis_rules(&self) -> &'static [DiagnosisRule] {
        self.diagnosis_rules
    }

    pub fn treatment_rules(&self) -> &'static [TreatmentRule] {
        self.treatment_rules
    }

    /// Runs every rule to fixpoint, leaving derived facts in `store`.
    ///
    /// No rule consumes a treatment, so any symptom that triggers a
    /// diagnosis settles in two productive passes. Running again without
    /// new symptoms derives nothing.
    pub fn run(&self, store: &mut FactStore) -> ChainReport {
        let mut report = ChainReport::default();

        loop {
            let mut new_this_pass = Vec::new();

            for rule in self.diagnosis_rules {
                let fact = Fact::Diagnosis(rule.conclusion);

                if rule.matches(store) && !store.contains(&fact) && !new_this_pass.contains(&fact) {
                    tracing::trace!(rule = rule.name, "rule fired");
                    new_this_pass.push(fact);
                }
            }

            for rule in self.treatment_rules {
                let fact = Fact::Treatment(rule.treatment);

                if rule.matches(store) && !store.contains(&fact) && !new_this_pass.contains(&fact) {
                    tracing::trace!(rule = rule.name, "rule fired");
                    new_this_pass.push(fact);
                }
            }

            if new_this_pass.is_empty() {
                break;
            }

            report.passes += 1;

            for fact in new_this_pass {
                if store.insert(fact) {
                    report.derived += 1;
                }
            }

            tracing::debug!(pass = report.passes, derived = report.derived, "forward chaining pass");
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::FactKind;

    fn store_with(symptoms: &[(&str, &str)]) -> FactStore {
        let mut store = FactStore::new();

        for (category, characteristic) in symptoms {
            store.assert_symptom(category, characteristic).unwrap();
        }

        store
    }

    #[test]
    fn test_every_trigger_alone_fires_its_rule() {
        let engine = RuleEngine::new();

        for rule in engine.diagnosis_rules() {
            for trigger in rule.triggers {
                let mut store = FactStore::new();
                store.insert(Fact::Symptom(*trigger));

                engine.run(&mut store);

                assert_eq!(store.diagnoses().iter().copied().collect::<Vec<_>>(), vec![rule.conclusion]);
                assert!(store.treatments().contains(&Treatment::for_deficiency(rule.conclusion)));
            }
        }
    }

    #[test]
    fn test_fixpoint_in_two_passes() {
        let mut store = store_with(&[("Leaf color", "pale green"), ("Leaf condition", "stunted growth")]);

        let report = RuleEngine::new().run(&mut store);

        // One diagnosis and one treatment even though both triggers matched.
        assert_eq!(report, ChainReport { passes: 2, derived: 2 });
    }

    #[test]
    fn test_run_is_idempotent() {
        let engine = RuleEngine::new();
        let mut store = store_with(&[("Leaf color", "purple or reddish"), ("Stem condition", "weak or brittle")]);

        engine.run(&mut store);
        let before = store.len();
        let report = engine.run(&mut store);

        assert_eq!(report, ChainReport::default());
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_untriggering_symptoms_derive_nothing() {
        let mut store = store_with(&[("Leaf color", "uniform yellow"), ("Stem condition", "thickened")]);

        let report = RuleEngine::new().run(&mut store);

        assert_eq!(report.passes, 0);
        assert_eq!(store.all_facts(FactKind::Diagnosis).count(), 0);
        assert_eq!(store.all_facts(FactKind::Treatment).count(), 0);
    }

    #[test]
    fn test_treatment_iff_diagnosis() {
        let mut store = store_with(&[("Growth and development", "late maturation"), ("Leaf color", "dry/burnt edges")]);

        RuleEngine::new().run(&mut store);

        for deficiency in Deficiency::ALL {
            assert_eq!(
                store.diagnoses().contains(&deficiency),
                store.treatments().contains(&Treatment::for_deficiency(deficiency)),
            );
        }
        assert!(!store.diagnoses().contains(&Deficiency::Nitrogen));
    }
}
