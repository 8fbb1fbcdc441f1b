use std::collections::HashMap;
use std::hash::Hash;

use crate::dsl::Expr;
use crate::error::{FuzzyError, FuzzyResult};
use crate::inputs::Inputs;
use crate::ops::*;
use crate::outputs::{OutputProfile, Outputs};
use crate::rules::Rules;
use crate::variable::{Variable, VariableKey, Variables};

/// The operators of the inference pipeline. The defaults are the standard
/// Mamdani choices: min conjunction, max disjunction, clipping
/// implication, max aggregation and centroid defuzzification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InferenceOps {
    pub and_op: AndOp,
    pub or_op: OrOp,
    pub implication: ImplicationOp,
    pub aggregation: ProductionLink,
    pub defuzzification: DefuzzificationOp,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MamdaniInference {
    ops: InferenceOps,
}

impl MamdaniInference {
    pub fn new(ops: InferenceOps) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &InferenceOps {
        &self.ops
    }

    /// Fires every rule against crisp `inputs` and aggregates the strengths
    /// of rules sharing a consequent label.
    pub fn evaluate<T: Copy + Eq + Hash>(
        &self,
        vars: &Variables<T>,
        rules: &Rules<T>,
        inputs: &Inputs,
    ) -> FuzzyResult<Outputs<T>> {
        let mut strengths = HashMap::new();

        for rule in rules.iter() {
            let firing = self.premise_degree(vars, &rule.premise, inputs)?;

            // A consequence is a single proposition or a conjunction of them;
            // every named label receives the rule's firing strength
            for (var_key, term) in rule.consequence.propositions() {
                let entry = strengths.entry((var_key, *term)).or_insert(0.);
                *entry = self.ops.aggregation.apply(*entry, firing);
            }
        }

        Ok(Outputs::new(strengths))
    }

    fn premise_degree<T: Copy + Eq>(&self, vars: &Variables<T>, expr: &Expr<T>, inputs: &Inputs) -> FuzzyResult<f64> {
        match expr {
            Expr::Is(var_key, term) => {
                let var = &vars.0[*var_key];
                let x = inputs.value(*var_key).ok_or_else(|| FuzzyError::MissingInput {
                    variable: var.name().to_string(),
                })?;

                Ok(var.membership(term, x))
            },
            Expr::And(exprs) => exprs.iter().try_fold(self.ops.and_op.identity(), |acc, e| {
                Ok(self.ops.and_op.apply(acc, self.premise_degree(vars, e, inputs)?))
            }),
            Expr::Or(exprs) => exprs.iter().try_fold(self.ops.or_op.identity(), |acc, e| {
                Ok(self.ops.or_op.apply(acc, self.premise_degree(vars, e, inputs)?))
            }),
        }
    }

    /// Shapes each label of `output` by its strength and combines the
    /// results pointwise over the universe.
    pub fn aggregate<T: Copy + Eq + Hash, I>(
        &self,
        vars: &Variables<T>,
        output: Variable<I>,
        strengths: &Outputs<T>,
    ) -> OutputProfile {
        self.aggregate_key(vars, output.0, strengths)
    }

    fn aggregate_key<T: Copy + Eq + Hash>(
        &self,
        vars: &Variables<T>,
        key: VariableKey,
        strengths: &Outputs<T>,
    ) -> OutputProfile {
        let var = &vars.0[key];
        let mut membership = vec![0.; var.universe.len()];

        for (term, shape) in &var.terms {
            let strength = strengths.strength_of(key, term);
            let implied = self.ops.implication.call(shape.samples.iter().copied(), strength);

            membership = self.ops.aggregation.call(membership, implied).collect();
        }

        OutputProfile {
            universe: var.universe.clone(),
            membership,
        }
    }

    /// Reduces an aggregated profile to one crisp value.
    pub fn defuzzify(&self, profile: &OutputProfile) -> FuzzyResult<f64> {
        self.ops
            .defuzzification
            .call(&profile.universe, &profile.membership)
            .ok_or(FuzzyError::DefuzzificationUndefined)
    }
}
