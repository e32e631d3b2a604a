//! Uniform position-grid construction.

/// `n` evenly spaced points from `a` to `b`, endpoints inclusive.
///
/// The last point is pinned to `b` exactly rather than accumulated, so the
/// grid endpoints match the requested range bitwise.
///
/// # Panics
/// Panics if `n < 2`; callers validate grid sizes before building one.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    assert!(n >= 2, "linspace: need at least two grid points");

    let step = (b - a) / (n as f64 - 1.0);
    let mut out = Vec::with_capacity(n);
    for i in 0..n - 1 {
        out.push(a + step * i as f64);
    }
    out.push(b);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let g = linspace(-1.2, 1.2, 1000);
        assert_eq!(g.len(), 1000);
        assert_eq!(g[0], -1.2);
        assert_eq!(g[999], 1.2);
    }

    #[test]
    fn spacing_is_uniform() {
        let g = linspace(0.0, 1.0, 11);
        for w in g.windows(2) {
            assert!((w[1] - w[0] - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn strictly_increasing() {
        let g = linspace(-5.0, 5.0, 100);
        assert!(g.windows(2).all(|w| w[0] < w[1]));
    }
}
