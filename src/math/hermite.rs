//! Physicists' Hermite polynomials over a position grid.
//!
//! The oscillator eigenfunctions need `H_n(x)` for degrees up to ~150. The
//! standard three-term recurrence is:
//!
//! - `H_0(x) = 1`
//! - `H_1(x) = 2x`
//! - `H_k(x) = 2x·H_{k-1}(x) - 2(k-1)·H_{k-2}(x)`
//!
//! Numerical notes:
//! - The recurrence is evaluated iteratively with two rolling arrays. A
//!   closed-form expansion (sum of factorial-weighted monomials) cancels
//!   catastrophically and overflows long before the recurrence does.
//! - Raw `H_n(x)` values still grow like `(2x)^n` at large `|x|`; the caller
//!   bounds the degree (see `domain::MAX_LEVEL`) so they stay inside f64.

/// Evaluate the degree-`n` physicists' Hermite polynomial at every grid point.
///
/// Returns a vector aligned index-for-index with `x`.
pub fn hermite(n: u32, x: &[f64]) -> Vec<f64> {
    if n == 0 {
        return vec![1.0; x.len()];
    }

    let mut curr: Vec<f64> = x.iter().map(|&xi| 2.0 * xi).collect();
    if n == 1 {
        return curr;
    }

    // `prev` holds H_{k-2}; each pass overwrites it with H_k in place and
    // swaps, so the whole loop allocates nothing beyond the two buffers.
    let mut prev = vec![1.0; x.len()];
    for k in 2..=n {
        let two_k_minus_2 = 2.0 * (k - 1) as f64;
        for (i, &xi) in x.iter().enumerate() {
            prev[i] = 2.0 * xi * curr[i] - two_k_minus_2 * prev[i];
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    curr
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(a: f64, b: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| a + (b - a) * i as f64 / (n as f64 - 1.0))
            .collect()
    }

    #[test]
    fn degree_zero_is_all_ones() {
        let x = grid(-3.0, 3.0, 21);
        assert_eq!(hermite(0, &x), vec![1.0; x.len()]);
    }

    #[test]
    fn degree_one_is_twice_x() {
        let x = grid(-3.0, 3.0, 21);
        let h1 = hermite(1, &x);
        for (xi, hi) in x.iter().zip(&h1) {
            assert_eq!(*hi, 2.0 * xi);
        }
    }

    #[test]
    fn low_degree_closed_forms() {
        let x = grid(-2.5, 2.5, 11);
        let h2 = hermite(2, &x);
        let h3 = hermite(3, &x);
        for (i, &xi) in x.iter().enumerate() {
            let want2 = 4.0 * xi * xi - 2.0;
            let want3 = 8.0 * xi.powi(3) - 12.0 * xi;
            assert!(
                (h2[i] - want2).abs() < 1e-12,
                "H_2({xi}) = {}, want {want2}",
                h2[i]
            );
            assert!(
                (h3[i] - want3).abs() < 1e-12,
                "H_3({xi}) = {}, want {want3}",
                h3[i]
            );
        }
    }

    #[test]
    fn recurrence_holds_pointwise() {
        let x = grid(-4.0, 4.0, 33);
        for n in 2..=12u32 {
            let hn = hermite(n, &x);
            let hn1 = hermite(n - 1, &x);
            let hn2 = hermite(n - 2, &x);
            for (i, &xi) in x.iter().enumerate() {
                let want = 2.0 * xi * hn1[i] - 2.0 * (n - 1) as f64 * hn2[i];
                let scale = want.abs().max(1.0);
                assert!(
                    (hn[i] - want).abs() / scale < 1e-12,
                    "recurrence broken at n={n}, x={xi}: got {}, want {want}",
                    hn[i]
                );
            }
        }
    }

    #[test]
    fn high_degree_stays_finite_on_plot_range() {
        // n = 150 at the 20%-extended turning point is the worst case the
        // evaluator is asked to handle.
        let half_width = 1.2 * (2.0 * 150.0_f64 + 1.0).sqrt();
        let x = grid(-half_width, half_width, 1000);
        let h = hermite(150, &x);
        assert!(h.iter().all(|v| v.is_finite()));
    }
}
