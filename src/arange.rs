/// Evenly spaced samples over the half-open interval `[start, stop)`,
/// matching numpy.arange.
#[derive(Clone, Debug)]
pub struct Arange {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Arange {
    /// Most samples a single range may hold.
    pub const MAX_LEN: usize = 100_000;

    /// Empty unless `step > 0` and the range holds at most
    /// [`MAX_LEN`](Self::MAX_LEN) samples.
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        let len = Self::sample_count(start, stop, step).unwrap_or(0);

        Arange {
            start,
            step,
            index: 0,
            len,
        }
    }

    /// `ceil((stop - start) / step)`, or `None` if that is not a finite
    /// count within [`MAX_LEN`](Self::MAX_LEN).
    pub fn sample_count(start: f64, stop: f64, step: f64) -> Option<usize> {
        if step.is_nan() || step <= 0. || stop <= start {
            return Some(0);
        }

        let n = ((stop - start) / step).ceil();

        if n.is_finite() && n <= Self::MAX_LEN as f64 {
            Some(n as usize)
        } else {
            None
        }
    }
}

impl Iterator for Arange {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            // not accumulated: sample i is always start + i * step
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Arange {}

#[test]
fn test_arange_matches_numpy_lengths() {
    assert_eq!(Arange::new(0., 14., 0.1).len(), 140);
    assert_eq!(Arange::new(0., 10., 0.1).len(), 100);
    assert_eq!(Arange::new(0., 5., 0.1).len(), 50);
    assert_eq!(Arange::new(0., 1., 0.3).collect::<Vec<_>>(), vec![0., 0.3, 0.6, 0.8999999999999999]);
}

#[test]
fn test_arange_degenerate_step() {
    assert_eq!(Arange::new(0., 5., 0.).count(), 0);
    assert_eq!(Arange::new(0., 5., -0.1).count(), 0);
    assert_eq!(Arange::new(0., 5., f64::NAN).count(), 0);
}

#[test]
fn test_arange_rejects_oversized_range() {
    assert_eq!(Arange::sample_count(0., 14., 1e-300), None);
    assert_eq!(Arange::sample_count(0., 14., 1e-4), None);
    assert_eq!(Arange::sample_count(0., 14., 0.1), Some(140));
    assert_eq!(Arange::new(0., 14., 1e-300).len(), 0);
}
