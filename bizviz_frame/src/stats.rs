// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary statistics over numeric columns.
//!
//! Non-finite inputs are treated as missing and skipped. Degenerate inputs
//! (no values, zero variance) produce `NaN`, never a panic.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Sum of the finite values (`0` if there are none).
pub fn sum(values: &[f64]) -> f64 {
    values.iter().copied().filter(|v| v.is_finite()).sum()
}

/// Mean of the finite values, or `NaN` if there are none.
pub fn mean(values: &[f64]) -> f64 {
    let mut total = 0.0;
    let mut n = 0_usize;
    for v in values.iter().copied().filter(|v| v.is_finite()) {
        total += v;
        n += 1;
    }
    if n == 0 { f64::NAN } else { total / n as f64 }
}

/// `(min, max)` over the finite values, or `None` if there are none.
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.iter().copied().filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    (min.is_finite() && max.is_finite()).then_some((min, max))
}

/// Pairs where both values are finite.
fn complete_pairs(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y)
        .map(|(&a, &b)| (a, b))
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .collect()
}

/// Centered second moments `(n, mean_x, mean_y, sxx, syy, sxy)` over complete pairs.
fn moments(x: &[f64], y: &[f64]) -> (usize, f64, f64, f64, f64, f64) {
    let pairs = complete_pairs(x, y);
    let n = pairs.len();
    if n == 0 {
        return (0, f64::NAN, f64::NAN, 0.0, 0.0, 0.0);
    }
    let nf = n as f64;
    let mx = pairs.iter().map(|p| p.0).sum::<f64>() / nf;
    let my = pairs.iter().map(|p| p.1).sum::<f64>() / nf;
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (a, b) in pairs {
        let dx = a - mx;
        let dy = b - my;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    (n, mx, my, sxx, syy, sxy)
}

/// Pearson correlation over pairwise-complete rows.
///
/// Returns `NaN` with fewer than two complete rows or when either side has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let (n, _, _, sxx, syy, sxy) = moments(x, y);
    if n < 2 || sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}

/// Ordinary least-squares line `y = slope * x + intercept` over complete rows.
///
/// Returns `None` with fewer than two complete rows or zero variance in `x`.
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<(f64, f64)> {
    let (n, mx, my, sxx, _, sxy) = moments(x, y);
    if n < 2 || sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, my - slope * mx))
}

/// The `q`-quantile (`0..=1`) of the finite values, linearly interpolated
/// between closest ranks. Returns `NaN` if there are no finite values.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() || !q.is_finite() {
        return f64::NAN;
    }
    sorted.sort_by(f64::total_cmp);
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor();
    let frac = pos - lo;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "pos is within 0..len after clamping q"
    )]
    let i = lo as usize;
    match sorted.get(i + 1) {
        Some(&next) if frac > 0.0 => sorted[i] + frac * (next - sorted[i]),
        _ => sorted[i],
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pearson_matches_hand_computation() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        // sxy = 6, sxx = 10, syy = 6
        assert!(close(pearson(&x, &y), 6.0 / (10.0_f64 * 6.0).sqrt()));
        assert!(close(pearson(&x, &x), 1.0));
    }

    #[test]
    fn pearson_skips_missing_pairs_and_degenerates_to_nan() {
        let x = [1.0, f64::NAN, 3.0, 4.0];
        let y = [1.0, 100.0, 3.0, 4.0];
        assert!(close(pearson(&x, &y), 1.0));
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(pearson(&[1.0], &[1.0]).is_nan());
        assert!(pearson(&[], &[]).is_nan());
    }

    #[test]
    fn quantile_interpolates_linearly() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert!(close(quantile(&v, 0.0), 1.0));
        assert!(close(quantile(&v, 1.0), 4.0));
        assert!(close(quantile(&v, 0.5), 2.5));
        assert!(close(quantile(&v, 0.95), 3.85));
        assert!(quantile(&[], 0.95).is_nan());
        assert!(close(quantile(&[f64::NAN, 7.0], 0.95), 7.0));
    }

    #[test]
    fn linear_fit_recovers_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let (m, b) = linear_fit(&x, &y).unwrap();
        assert!(close(m, 2.0));
        assert!(close(b, 1.0));
        assert!(linear_fit(&[2.0, 2.0], &[1.0, 3.0]).is_none());
    }

    #[test]
    fn mean_and_sum_skip_missing() {
        assert!(close(sum(&[1.0, f64::NAN, 2.0]), 3.0));
        assert!(close(mean(&[1.0, f64::NAN, 2.0]), 1.5));
        assert!(mean(&[f64::NAN]).is_nan());
        assert_eq!(extent(&[3.0, -1.0, f64::INFINITY]), Some((-1.0, 3.0)));
    }
}
