use std::marker::PhantomData;
use std::ops::RangeInclusive;

use fixed_map::Key as FixedKey;
use slotmap::{new_key_type, SlotMap};

use crate::arange::Arange;
use crate::math::{sample, Trapezoid};
use crate::terms::Terms;

/// Sample step used for every universe unless configured otherwise.
pub const DEFAULT_STEP: f64 = 0.1;

/// Coarsest step that still samples every plant label at a nonzero degree.
pub const MAX_STEP: f64 = 1.0;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// Typed handle to a variable whose labels are `I`.
pub struct Variable<I>(pub(crate) VariableKey, PhantomData<I>);

impl<I> Clone for Variable<I> {
    fn clone(&self) -> Self {
        Variable(self.0, PhantomData)
    }
}

impl<I> Copy for Variable<I> {}

impl<I> std::fmt::Debug for Variable<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Variable").field(&self.0).finish()
    }
}

#[derive(Default)]
pub struct Variables<T>(pub(crate) SlotMap<VariableKey, LinguisticVariable<T>>);

impl<T: Copy + Eq> Variables<T> {
    pub fn new() -> Self {
        Self(SlotMap::with_key())
    }

    /// Registers a variable sampled over `domain`. A `None` step uses
    /// [`DEFAULT_STEP`].
    pub fn add<I: Into<T> + FixedKey + 'static>(
        &mut self,
        name: &'static str,
        domain: RangeInclusive<f64>,
        terms: Terms<I>,
        step: Option<f64>,
    ) -> Variable<I> {
        let start_terms = terms.0.iter().map(|(k, v)| (k.into(), *v));
        let key = self.0.insert(LinguisticVariable::new(
            name,
            domain,
            start_terms,
            step.unwrap_or(DEFAULT_STEP),
        ));

        Variable(key, PhantomData)
    }

    pub fn get<I>(&self, var: Variable<I>) -> Option<&LinguisticVariable<T>> {
        self.0.get(var.0)
    }
}

pub(crate) struct TermShape {
    pub(crate) mf: Trapezoid<f64>,
    /// `mf` sampled at every point of the universe
    pub(crate) samples: Vec<f64>,
}

pub struct LinguisticVariable<T> {
    name: &'static str,
    pub(crate) universe: Vec<f64>,
    pub(crate) min_u: f64,
    pub(crate) max_u: f64,
    // Insertion order is kept so aggregation visits labels deterministically
    pub(crate) terms: Vec<(T, TermShape)>,
}

impl<T: Copy + Eq> LinguisticVariable<T> {
    fn new(
        name: &'static str,
        domain: RangeInclusive<f64>,
        start_terms: impl IntoIterator<Item = (T, Trapezoid<f64>)>,
        step: f64,
    ) -> Self {
        let min_u = *domain.start();
        let max_u = *domain.end();
        // The domain is closed but the universe stops one step short of max,
        // like numpy.arange(min, max, step)
        let universe: Vec<f64> = Arange::new(min_u, max_u, step).collect();
        let terms = start_terms
            .into_iter()
            .map(|(term, mf)| {
                let samples = sample(&mf, &universe);
                (term, TermShape { mf, samples })
            })
            .collect();

        Self {
            name,
            universe,
            min_u,
            max_u,
            terms,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    pub fn domain(&self) -> RangeInclusive<f64> {
        self.min_u..=self.max_u
    }

    pub(crate) fn term(&self, term: &T) -> Option<&TermShape> {
        self.terms.iter().find(|(t, _)| t == term).map(|(_, shape)| shape)
    }

    /// Degree of `x` in `term`, with `x` clamped to the domain first.
    /// Unknown terms have degree zero.
    pub fn membership(&self, term: &T, x: f64) -> f64 {
        let x = x.clamp(self.min_u, self.max_u);

        self.term(term).map_or(0., |shape| shape.mf.degree(x))
    }

    /// The membership function of `term` sampled over the universe.
    pub fn sampled(&self, term: &T) -> Option<&[f64]> {
        self.term(term).map(|shape| &*shape.samples)
    }
}
