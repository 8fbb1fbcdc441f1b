//! Boundary API consumed by a front end.
//!
//! [`PlantExpert`] owns one diagnosis session (a [`FactStore`]) and shares a
//! read-only [`PlantModel`] for recommendations.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use crate::config::ExpertConfig;
use crate::engine::RuleEngine;
use crate::error::{ConfigResult, DiagnosisError, DiagnosisResult, FuzzyResult};
use crate::facts::{Deficiency, Fact, FactStore, Treatment};
use crate::model::PlantModel;
use crate::outputs::Recommendation;
use crate::symptoms::Symptom;

/// Outcome of [`PlantExpert::diagnose`]. `deficiencies` and `treatments`
/// are empty when the symptoms were valid but matched no rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub symptoms: BTreeSet<Symptom>,
    pub deficiencies: BTreeSet<Deficiency>,
    pub treatments: BTreeSet<Treatment>,
}

impl Diagnosis {
    pub fn from_store(store: &FactStore) -> Self {
        Self {
            symptoms: store.symptoms().clone(),
            deficiencies: store.diagnoses().clone(),
            treatments: store.treatments().clone(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.deficiencies.is_empty()
    }
}

pub struct PlantExpert {
    session: FactStore,
    engine: RuleEngine,
    model: Arc<PlantModel>,
}

impl Default for PlantExpert {
    fn default() -> Self {
        Self::with_model(Arc::new(PlantModel::new()))
    }
}

impl PlantExpert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExpertConfig) -> ConfigResult<Self> {
        Ok(Self::with_model(Arc::new(PlantModel::from_config(&config.fuzzy)?)))
    }

    /// Builds a session around a model that may be shared with others.
    pub fn with_model(model: Arc<PlantModel>) -> Self {
        Self {
            session: FactStore::new(),
            engine: RuleEngine::new(),
            model,
        }
    }

    /// Diagnoses deficiencies from `(category, characteristic)` pairs.
    ///
    /// Every pair is validated before the session is touched; on success the
    /// session is cleared, the symptoms are asserted and the rules run to
    /// fixpoint. The session keeps the resulting facts until the next call
    /// or [`reset_session`](Self::reset_session).
    pub fn diagnose<I, C, S>(&mut self, symptoms: I) -> DiagnosisResult<Diagnosis>
    where
        I: IntoIterator<Item = (C, S)>,
        C: AsRef<str>,
        S: AsRef<str>,
    {
        let parsed = symptoms
            .into_iter()
            .map(|(category, characteristic)| Symptom::parse(category.as_ref(), characteristic.as_ref()))
            .collect::<DiagnosisResult<Vec<_>>>()?;

        if parsed.is_empty() {
            return Err(DiagnosisError::EmptySymptomSet);
        }

        self.session.reset();

        for symptom in parsed {
            self.session.insert(Fact::Symptom(symptom));
        }

        let report = self.engine.run(&mut self.session);
        let diagnosis = Diagnosis::from_store(&self.session);

        tracing::debug!(
            symptoms = diagnosis.symptoms.len(),
            deficiencies = diagnosis.deficiencies.len(),
            passes = report.passes,
            "diagnosis complete"
        );

        Ok(diagnosis)
    }

    pub fn recommend(&self, ph: f64, watering_frequency: f64) -> FuzzyResult<Recommendation> {
        self.model.recommend(ph, watering_frequency)
    }

    /// Clears every asserted and derived fact.
    pub fn reset_session(&mut self) {
        self.session.reset();
    }

    pub fn session(&self) -> &FactStore {
        &self.session
    }

    pub fn model(&self) -> &Arc<PlantModel> {
        &self.model
    }
}
