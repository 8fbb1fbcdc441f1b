use num::Float;

/// Trapezoidal membership function with breakpoints `a <= b <= c <= d`.
///
/// Zero left of `a` and right of `d`, one on `[b, c]`, linear in between.
/// A degenerate edge (`a == b` or `c == d`) is a shoulder: the function is
/// already 1 at that breakpoint instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezoid<F> {
    pub a: F,
    pub b: F,
    pub c: F,
    pub d: F,
}

impl<F: Float> Trapezoid<F> {
    pub fn new([a, b, c, d]: [F; 4]) -> Self {
        debug_assert!(a <= b && b <= c && c <= d, "trapezoid breakpoints out of order");

        Self { a, b, c, d }
    }

    pub fn degree(&self, x: F) -> F {
        let Self { a, b, c, d } = *self;

        if x < a {
            F::zero()
        } else if x < b {
            (x - a) / (b - a)
        } else if x <= c {
            F::one()
        } else if x < d {
            (d - x) / (d - c)
        } else {
            F::zero()
        }
    }
}

/// Samples `mf` at each point of `universe`.
pub(crate) fn sample<F: Float>(mf: &Trapezoid<F>, universe: &[F]) -> Vec<F> {
    universe.iter().map(|x| mf.degree(*x)).collect()
}

#[test]
fn test_trapezoid_edges() {
    let t = Trapezoid::new([4.5, 6.5, 8., 10.]);

    assert_eq!(t.degree(4.5), 0.);
    assert_eq!(t.degree(5.5), 0.5);
    assert_eq!(t.degree(6.5), 1.);
    assert_eq!(t.degree(8.), 1.);
    assert_eq!(t.degree(9.), 0.5);
    assert_eq!(t.degree(10.), 0.);
    assert_eq!(t.degree(-3.), 0.);
    assert_eq!(t.degree(30.), 0.);
}

#[test]
fn test_trapezoid_shoulders() {
    let left = Trapezoid::new([0., 0., 4.5, 6.5]);
    let right = Trapezoid::new([8., 10., 14., 14.]);

    assert_eq!(left.degree(0.), 1.);
    assert_eq!(left.degree(6.5), 0.);
    assert_eq!(right.degree(14.), 1.);
    assert_eq!(right.degree(8.), 0.);
    assert!(!left.degree(0.).is_nan());
}

#[test]
fn test_sample() {
    let t = Trapezoid::new([0., 1., 2., 3.]);

    assert_eq!(sample(&t, &[0., 0.5, 1.5, 2.5, 3.]), vec![0., 0.5, 1., 0.5, 0.]);
}
