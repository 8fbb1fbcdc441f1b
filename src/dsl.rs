use crate::variable::{Variable, VariableKey};

/// A rule premise or consequence over labels of type `T`.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr<T> {
    Is(VariableKey, T),
    And(Vec<Expr<T>>),
    Or(Vec<Expr<T>>),
}

impl<T> Expr<T> {
    /// Conjunction. Chained `and`s collapse into one `And` node.
    pub fn and(self, rhs: Expr<T>) -> Self {
        match self {
            Expr::And(mut conjuncts) => {
                conjuncts.push(rhs);
                Expr::And(conjuncts)
            },
            lhs => Expr::And(vec![lhs, rhs]),
        }
    }

    /// Disjunction. Chained `or`s collapse into one `Or` node.
    pub fn or(self, rhs: Expr<T>) -> Self {
        match self {
            Expr::Or(mut disjuncts) => {
                disjuncts.push(rhs);
                Expr::Or(disjuncts)
            },
            lhs => Expr::Or(vec![lhs, rhs]),
        }
    }

    /// Every `Is` leaf, left to right.
    pub fn propositions(&self) -> Vec<(VariableKey, &T)> {
        let mut leaves = Vec::new();
        let mut pending = vec![self];

        while let Some(expr) = pending.pop() {
            match expr {
                Expr::Is(var_key, label) => leaves.push((*var_key, label)),
                Expr::And(exprs) | Expr::Or(exprs) => pending.extend(exprs.iter().rev()),
            }
        }

        leaves
    }
}

impl<I> Variable<I> {
    /// The proposition "`self` is `label`".
    pub fn is<T>(self, label: I) -> Expr<T>
    where
        I: Into<T>,
    {
        Expr::Is(self.0, label.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{Acidity, Label, PlantType, Watering};
    use crate::variable::Variables;

    #[test]
    fn test_chained_and_is_flat() {
        let mut vars = Variables::<Label>::new();
        let acidity = vars.add("acidity", 0. ..=14., Acidity::terms(), None);
        let watering = vars.add("watering", 0. ..=10., Watering::terms(), None);

        let expr: Expr<Label> = acidity
            .is(Acidity::Acidic)
            .and(watering.is(Watering::Low))
            .and(watering.is(Watering::Medium));

        match &expr {
            Expr::And(conjuncts) => assert_eq!(conjuncts.len(), 3),
            other => panic!("expected a conjunction, got {other:?}"),
        }
    }

    #[test]
    fn test_propositions_in_order() {
        let mut vars = Variables::<Label>::new();
        let acidity = vars.add("acidity", 0. ..=14., Acidity::terms(), None);
        let watering = vars.add("watering", 0. ..=10., Watering::terms(), None);
        let plant = vars.add("plant", 0. ..=5., PlantType::terms(), None);

        let expr: Expr<Label> = acidity
            .is(Acidity::Neutral)
            .or(watering.is(Watering::High).and(plant.is(PlantType::Fern)));

        let labels: Vec<Label> = expr.propositions().into_iter().map(|(_, l)| *l).collect();

        assert_eq!(
            labels,
            vec![
                Label::Acidity(Acidity::Neutral),
                Label::Watering(Watering::High),
                Label::Plant(PlantType::Fern),
            ]
        );
    }
}
