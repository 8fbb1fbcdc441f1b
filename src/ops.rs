use num::Float;
use serde::Deserialize;

/// And operator method for combining the propositions of a rule premise.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AndOp {
    #[default]
    Min,
    Prod,
}

impl AndOp {
    pub fn apply<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Min => F::min(u, v),
            Self::Prod => u * v,
        }
    }

    /// Identity element, so folds over an empty premise yield "fully true".
    pub fn identity<F: Float>(self) -> F {
        F::one()
    }
}

/// Or operator method for combining the propositions of a rule premise.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrOp {
    #[default]
    Max,
    ProbOr,
}

impl OrOp {
    pub fn apply<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => F::max(u, v),
            Self::ProbOr => u + v - u * v,
        }
    }

    pub fn identity<F: Float>(self) -> F {
        F::zero()
    }
}

/// Implication operator shaping a consequent's membership function by the
/// firing strength of its rule.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImplicationOp {
    /// Mamdani: clip the membership function at the strength
    #[default]
    Min,
    /// Larsen: scale the membership function by the strength
    Prod,
}

impl ImplicationOp {
    pub fn call<F: Float>(self, membership: impl IntoIterator<Item = F>, strength: F) -> impl Iterator<Item = F> {
        membership.into_iter().map(move |m| match self {
            Self::Min => F::min(m, strength),
            Self::Prod => m * strength,
        })
    }
}

/// Method for aggregating the consequences of the fuzzy rules
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductionLink {
    #[default]
    Max,
    ProbOr,
    BoundedSum,
}

impl ProductionLink {
    pub fn apply<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => F::max(u, v),
            Self::ProbOr => u + v - u * v,
            Self::BoundedSum => F::min(F::one(), u + v),
        }
    }

    pub fn call<F: Float>(
        self,
        u: impl IntoIterator<Item = F>,
        v: impl IntoIterator<Item = F>,
    ) -> impl Iterator<Item = F> {
        u.into_iter().zip(v).map(move |(u, v)| self.apply(u, v))
    }
}

/// Method for defuzzificating the aggregated membership function.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzificationOp {
    /// Center of gravity over the sample points
    #[default]
    Centroid,
    /// Sample point splitting the total membership in half
    Bisector,
    /// Mean of the values for which the membership function is maximum
    Mom,
    /// Smallest value for which the membership function is maximum
    Som,
    /// Largest value for which the membership function is maximum
    Lom,
}

impl DefuzzificationOp {
    /// Reduces `membership` sampled over `universe` to one crisp value.
    /// Returns `None` if the membership is zero everywhere.
    pub fn call<F: Float>(self, universe: &[F], membership: &[F]) -> Option<F> {
        debug_assert_eq!(universe.len(), membership.len());

        let total = membership.iter().fold(F::zero(), |acc, m| acc + *m);

        if total <= F::zero() {
            return None;
        }

        let samples = universe.iter().copied().zip(membership.iter().copied());

        match self {
            Self::Centroid => {
                let moment = samples.fold(F::zero(), |acc, (x, m)| acc + x * m);

                Some(moment / total)
            },
            Self::Bisector => {
                let half = total / (F::one() + F::one());
                let mut cum = F::zero();

                for (x, m) in samples {
                    cum = cum + m;
                    if cum >= half {
                        return Some(x);
                    }
                }

                universe.last().copied()
            },
            Self::Mom | Self::Som | Self::Lom => {
                let maximum = membership.iter().copied().fold(F::zero(), F::max);
                let mut at_max = samples.filter_map(|(x, m)| if m == maximum { Some(x) } else { None });

                match self {
                    Self::Som => at_max.next(),
                    Self::Lom => at_max.last(),
                    _ => {
                        let (n, sum) = at_max.fold((0usize, F::zero()), |(n, sum), x| (n + 1, sum + x));

                        F::from(n).map(|n| sum / n)
                    },
                }
            },
        }
    }
}
