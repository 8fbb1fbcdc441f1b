pub use fixed_map::Key;
use fixed_map::Map as FixedMap;

use crate::math::Trapezoid;

/// The labelled membership functions of one linguistic variable.
#[derive(Default)]
pub struct Terms<K: Key>(pub(crate) FixedMap<K, Trapezoid<f64>>);

impl<K: Key> Terms<K> {
    pub fn new() -> Self {
        Self(FixedMap::new())
    }

    pub fn insert(&mut self, key: K, value: Trapezoid<f64>) {
        self.0.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Key> FromIterator<(K, Trapezoid<f64>)> for Terms<K> {
    fn from_iter<T: IntoIterator<Item = (K, Trapezoid<f64>)>>(iter: T) -> Self {
        let mut terms = Self::new();

        for (key, value) in iter {
            terms.insert(key, value);
        }

        terms
    }
}
