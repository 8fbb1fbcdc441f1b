use crate::dsl::Expr;
use crate::labels::{Acidity, PlantType, Watering};

/// The complete decision table: one consequent per (acidity, watering) cell.
pub const DECISION_TABLE: [(Acidity, Watering, PlantType); 9] = [
    (Acidity::Acidic, Watering::Low, PlantType::Rosebush),
    (Acidity::Acidic, Watering::Medium, PlantType::Fern),
    (Acidity::Acidic, Watering::High, PlantType::Fern),
    (Acidity::Neutral, Watering::Low, PlantType::Rosebush),
    (Acidity::Neutral, Watering::Medium, PlantType::Rosebush),
    (Acidity::Neutral, Watering::High, PlantType::Fern),
    (Acidity::Alkaline, Watering::Low, PlantType::Cactus),
    (Acidity::Alkaline, Watering::Medium, PlantType::Rosebush),
    (Acidity::Alkaline, Watering::High, PlantType::Fern),
];

#[derive(Default)]
pub struct Rules<T>(pub(crate) Vec<Rule<T>>);

impl<T> Rules<T> {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, premise: Expr<T>, consequence: Expr<T>) {
        self.0.push(Rule { premise, consequence });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule<T>> {
        self.0.iter()
    }
}

pub struct Rule<T> {
    pub premise: Expr<T>,
    pub consequence: Expr<T>,
}
