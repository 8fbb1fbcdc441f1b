use std::collections::HashMap;

use crate::variable::{Variable, VariableKey};

/// Crisp values for the input variables of one inference.
#[derive(Debug, Default)]
pub struct Inputs(HashMap<VariableKey, f64>);

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `var`, replacing any earlier one.
    pub fn add<I>(&mut self, var: Variable<I>, value: f64) -> &mut Self {
        self.0.insert(var.0, value);
        self
    }

    pub fn get<I>(&self, var: Variable<I>) -> Option<f64> {
        self.value(var.0)
    }

    pub(crate) fn value(&self, key: VariableKey) -> Option<f64> {
        self.0.get(&key).copied()
    }
}
