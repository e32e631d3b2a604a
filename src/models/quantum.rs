//! Oscillator eigenfunctions and their probability density.
//!
//! The normalized eigenfunction in natural units (ħ = m = ω = 1) is:
//!
//! ```text
//! ψₙ(x) = N_n · H_n(x) · exp(-x²/2),   N_n = (2ⁿ · n! · √π)^(-1/2)
//! ```
//!
//! Numerical notes:
//! - `2ⁿ·n!` overflows f64 around n = 170 if formed directly, and loses
//!   precision well before that. `N_n` is therefore assembled in the log
//!   domain: `ln N_n = -½(n·ln2 + ln n! + ½·lnπ)`, with `ln n!` summed
//!   term by term.
//! - For the supported degree range the product `N_n · H_n(x)` stays well
//!   inside f64 on the plotted domain, so no further rescaling is needed.

use std::f64::consts::{LN_2, PI};

use crate::domain::EnergyLevel;
use crate::math::hermite;

/// Evaluate the normalized eigenfunction `ψₙ` on a position grid.
///
/// Pure function of `(level, x)`: identical inputs produce bitwise-identical
/// output.
pub fn wavefunction(level: EnergyLevel, x: &[f64]) -> Vec<f64> {
    let n = level.get();
    let ln_norm = -0.5 * (n as f64 * LN_2 + ln_factorial(n) + 0.5 * PI.ln());
    let norm = ln_norm.exp();

    let h = hermite(n, x);
    x.iter()
        .zip(h)
        .map(|(&xi, hi)| norm * hi * (-0.5 * xi * xi).exp())
        .collect()
}

/// Squared-magnitude probability density of a (real-valued) wavefunction.
pub fn probability_density(psi: &[f64]) -> Vec<f64> {
    psi.iter().map(|&v| v * v).collect()
}

/// `ln(n!)` as a plain sum of logarithms.
///
/// Exact enough for the normalization constant (error ~1e-14 at n = 150)
/// without ever forming the factorial itself.
fn ln_factorial(n: u32) -> f64 {
    (2..=u64::from(n)).map(|k| (k as f64).ln()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{linspace, trapezoid};
    use crate::models::range::x_range;

    fn level(n: u32) -> EnergyLevel {
        EnergyLevel::new(n).unwrap()
    }

    #[test]
    fn ln_factorial_spot_values() {
        assert_eq!(ln_factorial(0), 0.0);
        assert_eq!(ln_factorial(1), 0.0);
        // 5! = 120
        assert!((ln_factorial(5) - 120.0_f64.ln()).abs() < 1e-12);
        // 10! = 3_628_800
        assert!((ln_factorial(10) - 3_628_800.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn ground_state_matches_analytic_form() {
        // ψ₀(x) = π^(-1/4)·exp(-x²/2); at the origin that is ≈ 0.7511.
        let psi = wavefunction(level(0), &[0.0, 1.0]);
        let want0 = PI.powf(-0.25);
        assert!(
            (psi[0] - want0).abs() < 1e-12,
            "ψ₀(0) = {}, want {want0}",
            psi[0]
        );
        let want1 = PI.powf(-0.25) * (-0.5_f64).exp();
        assert!((psi[1] - want1).abs() < 1e-12);
    }

    #[test]
    fn parity_alternates_with_level() {
        let xs = [0.3, 0.75, 1.4, 2.9];
        let neg: Vec<f64> = xs.iter().map(|&v| -v).collect();
        for n in [0u32, 1, 2, 3, 8, 13] {
            let plus = wavefunction(level(n), &xs);
            let minus = wavefunction(level(n), &neg);
            let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
            for i in 0..xs.len() {
                let want = sign * plus[i];
                let scale = want.abs().max(1e-300);
                assert!(
                    (minus[i] - want).abs() / scale < 1e-12,
                    "parity broken at n={n}, x={}",
                    xs[i]
                );
            }
        }
    }

    #[test]
    fn density_integrates_to_one_across_levels() {
        // A wide grid: the display window cuts real tail mass at low n
        // (that truncation is what the drift diagnostic reports), so the
        // unit-mass property needs margin past the plotted range.
        for n in [0u32, 1, 2, 10, 50, 100] {
            let lv = level(n);
            let half_width = 1.2 * lv.turning_point() + 5.0;
            let x = linspace(-half_width, half_width, 4000);
            let density = probability_density(&wavefunction(lv, &x));
            let integral = trapezoid(&x, &density);
            assert!(
                (integral - 1.0).abs() < 0.01,
                "∫|ψ_{n}|² = {integral}, expected within 1% of 1"
            );
        }
    }

    #[test]
    fn display_window_truncates_ground_state_mass() {
        // Over ±1.2 the ground state carries erf(1.2) ≈ 0.9103 of its mass.
        // The drift warning at low levels comes from this window choice, not
        // from the integrator.
        let lv = level(0);
        let (lo, hi) = x_range(lv);
        let x = linspace(lo, hi, 1000);
        let density = probability_density(&wavefunction(lv, &x));
        let integral = trapezoid(&x, &density);
        assert!(
            (integral - 0.9103).abs() < 1e-3,
            "window integral {integral}, want ≈ erf(1.2)"
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let lv = level(17);
        let (lo, hi) = x_range(lv);
        let x = linspace(lo, hi, 500);
        let a = wavefunction(lv, &x);
        let b = wavefunction(lv, &x);
        assert_eq!(a, b, "identical inputs must produce bitwise-identical output");
    }

    #[test]
    fn stays_finite_at_the_level_cap() {
        let lv = level(crate::domain::MAX_LEVEL);
        let (lo, hi) = x_range(lv);
        let x = linspace(lo, hi, 1000);
        let psi = wavefunction(lv, &x);
        assert!(psi.iter().all(|v| v.is_finite()));

        let density = probability_density(&psi);
        assert!(density.iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn density_is_square_of_wavefunction() {
        let psi = [0.5, -0.25, 0.0, 2.0];
        assert_eq!(probability_density(&psi), vec![0.25, 0.0625, 0.0, 4.0]);
    }
}
