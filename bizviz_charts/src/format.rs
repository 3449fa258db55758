// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for tick and data labels.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using just enough decimals to tell neighbouring ticks apart.
///
/// `step` is the distance between ticks; `0` (unknown) falls back to [`format_value`].
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return format_value(v);
    }
    let decimals = if step >= 1.0 {
        0
    } else {
        let d = (-step.log10()).ceil().clamp(0.0, 12.0);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=12")]
        {
            d as usize
        }
    };
    // Avoid "-0".
    let v = if v.abs() < step * 1e-9 { 0.0 } else { v };
    alloc::format!("{v:.decimals$}")
}

/// Formats a data value for labels: integers without decimals, others with up to two.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    if (v - v.round()).abs() < 1e-9 {
        alloc::format!("{:.0}", v.round())
    } else {
        let s = alloc::format!("{v:.2}");
        String::from(s.trim_end_matches('0').trim_end_matches('.'))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn tick_decimals_follow_step() {
        assert_eq!(format_tick_with_step(2000.0, 500.0), "2000");
        assert_eq!(format_tick_with_step(0.4, 0.2), "0.4");
        assert_eq!(format_tick_with_step(0.25, 0.05), "0.25");
        assert_eq!(format_tick_with_step(-1e-17, 0.5), "0.0");
    }

    #[test]
    fn values_drop_trailing_zeros() {
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(1.234), "1.23");
        assert_eq!(format_value(f64::NAN), "NaN");
    }
}
