//! Working memory for a single diagnosis session.
//!
//! Facts are held in typed sets, one per kind, so asserting an identical
//! fact twice is absorbed by value equality. Symptoms are the only facts a
//! caller asserts directly; diagnoses and treatments are produced by the
//! [`RuleEngine`](crate::engine::RuleEngine).

use std::collections::btree_set::{self, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::error::DiagnosisResult;
use crate::symptoms::Symptom;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    Nitrogen,
    Potassium,
    Phosphorus,
}

impl Deficiency {
    pub const ALL: [Deficiency; 3] = [Self::Nitrogen, Self::Potassium, Self::Phosphorus];

    pub fn name(self) -> &'static str {
        match self {
            Self::Nitrogen => "nitrogen",
            Self::Potassium => "potassium",
            Self::Phosphorus => "phosphorus",
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A treatment recommendation. There is exactly one per deficiency.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Treatment {
    recommendation: &'static str,
}

impl Treatment {
    pub const fn for_deficiency(deficiency: Deficiency) -> Self {
        let recommendation = match deficiency {
            Deficiency::Nitrogen => "Aplicar fertilizante con urea o nitrato de amonio",
            Deficiency::Potassium => {
                "Añadir fertilizante rico en potasio, como ceniza de madera o sulfato de potasio"
            },
            Deficiency::Phosphorus => "Incorporar fertilizantes con fosfato, como superfosfato de calcio",
        };

        Self { recommendation }
    }

    pub fn as_str(&self) -> &'static str {
        self.recommendation
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.recommendation)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FactKind {
    Symptom,
    Diagnosis,
    Treatment,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Fact {
    Symptom(Symptom),
    Diagnosis(Deficiency),
    Treatment(Treatment),
}

impl Fact {
    pub fn kind(&self) -> FactKind {
        match self {
            Self::Symptom(_) => FactKind::Symptom,
            Self::Diagnosis(_) => FactKind::Diagnosis,
            Self::Treatment(_) => FactKind::Treatment,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FactStore {
    symptoms: BTreeSet<Symptom>,
    diagnoses: BTreeSet<Deficiency>,
    treatments: BTreeSet<Treatment>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and asserts a symptom. Returns `true` if the fact was not
    /// already present.
    pub fn assert_symptom(&mut self, category: &str, characteristic: &str) -> DiagnosisResult<bool> {
        let symptom = Symptom::parse(category, characteristic)?;

        Ok(self.insert(Fact::Symptom(symptom)))
    }

    /// Inserts an already validated fact. Returns `true` if it was new.
    pub(crate) fn insert(&mut self, fact: Fact) -> bool {
        match fact {
            Fact::Symptom(s) => self.symptoms.insert(s),
            Fact::Diagnosis(d) => self.diagnoses.insert(d),
            Fact::Treatment(t) => self.treatments.insert(t),
        }
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        match fact {
            Fact::Symptom(s) => self.symptoms.contains(s),
            Fact::Diagnosis(d) => self.diagnoses.contains(d),
            Fact::Treatment(t) => self.treatments.contains(t),
        }
    }

    /// Clears every fact, asserted and derived.
    pub fn reset(&mut self) {
        self.symptoms.clear();
        self.diagnoses.clear();
        self.treatments.clear();
    }

    /// A snapshot of the facts of one kind as they are right now.
    pub fn all_facts(&self, kind: FactKind) -> Facts<'_> {
        let inner = match kind {
            FactKind::Symptom => FactsInner::Symptoms(self.symptoms.iter()),
            FactKind::Diagnosis => FactsInner::Diagnoses(self.diagnoses.iter()),
            FactKind::Treatment => FactsInner::Treatments(self.treatments.iter()),
        };

        Facts(inner)
    }

    pub fn symptoms(&self) -> &BTreeSet<Symptom> {
        &self.symptoms
    }

    pub fn diagnoses(&self) -> &BTreeSet<Deficiency> {
        &self.diagnoses
    }

    pub fn treatments(&self) -> &BTreeSet<Treatment> {
        &self.treatments
    }

    pub fn len(&self) -> usize {
        self.symptoms.len() + self.diagnoses.len() + self.treatments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Iterator returned by [`FactStore::all_facts`].
pub struct Facts<'s>(FactsInner<'s>);

enum FactsInner<'s> {
    Symptoms(btree_set::Iter<'s, Symptom>),
    Diagnoses(btree_set::Iter<'s, Deficiency>),
    Treatments(btree_set::Iter<'s, Treatment>),
}

impl Iterator for Facts<'_> {
    type Item = Fact;

    #[inline]
    fn next(&mut self) -> Option<Fact> {
        match &mut self.0 {
            FactsInner::Symptoms(iter) => iter.next().copied().map(Fact::Symptom),
            FactsInner::Diagnoses(iter) => iter.next().copied().map(Fact::Diagnosis),
            FactsInner::Treatments(iter) => iter.next().copied().map(Fact::Treatment),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.0 {
            FactsInner::Symptoms(iter) => iter.size_hint(),
            FactsInner::Diagnoses(iter) => iter.size_hint(),
            FactsInner::Treatments(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Facts<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagnosisError;
    use crate::symptoms::Characteristic;

    #[test]
    fn test_assert_symptom_is_idempotent() {
        let mut store = FactStore::new();

        assert!(store.assert_symptom("Leaf color", "pale green").unwrap());
        assert!(!store.assert_symptom("Leaf color", "pale green").unwrap());
        assert_eq!(store.all_facts(FactKind::Symptom).count(), 1);
    }

    #[test]
    fn test_rejected_symptom_leaves_store_untouched() {
        let mut store = FactStore::new();

        let err = store.assert_symptom("Stem condition", "pale green").unwrap_err();

        assert!(matches!(err, DiagnosisError::InvalidCharacteristic { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_reset_clears_every_kind() {
        let mut store = FactStore::new();

        // Safe before anything was asserted.
        store.reset();

        store.assert_symptom("Leaf color", "pale green").unwrap();
        store.insert(Fact::Diagnosis(Deficiency::Nitrogen));
        store.insert(Fact::Treatment(Treatment::for_deficiency(Deficiency::Nitrogen)));
        assert_eq!(store.len(), 3);

        store.reset();

        assert!(store.is_empty());
        assert_eq!(store.all_facts(FactKind::Diagnosis).len(), 0);
    }

    #[test]
    fn test_all_facts_filters_by_kind() {
        let mut store = FactStore::new();

        store.assert_symptom("Leaf color", "purple or reddish").unwrap();
        store.assert_symptom("Stem condition", "weak or brittle").unwrap();
        store.insert(Fact::Diagnosis(Deficiency::Phosphorus));

        let symptoms: Vec<_> = store.all_facts(FactKind::Symptom).collect();

        assert_eq!(symptoms.len(), 2);
        assert!(symptoms.iter().all(|f| f.kind() == FactKind::Symptom));
        assert!(symptoms.contains(&Fact::Symptom(Symptom::new(Characteristic::WeakOrBrittle))));
        assert_eq!(
            store.all_facts(FactKind::Diagnosis).collect::<Vec<_>>(),
            vec![Fact::Diagnosis(Deficiency::Phosphorus)]
        );
    }

    #[test]
    fn test_treatment_text_per_deficiency() {
        assert_eq!(
            Treatment::for_deficiency(Deficiency::Nitrogen).as_str(),
            "Aplicar fertilizante con urea o nitrato de amonio"
        );

        let texts: BTreeSet<_> = Deficiency::ALL
            .into_iter()
            .map(|d| Treatment::for_deficiency(d).as_str())
            .collect();

        assert_eq!(texts.len(), 3);
    }
}
