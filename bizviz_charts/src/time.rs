// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar tick generation and formatting helpers.
//!
//! Time is modelled as a numeric **day number** (days since the common era, as
//! returned by [`days_from_date`]), and this module provides:
//! - calendar-aligned ticks (day steps for short spans, month starts otherwise)
//! - formatting for tick labels (`2017-11` or `2017-11-24`)

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chrono::{Datelike, NaiveDate};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const DAY_STEPS: &[u32] = &[1, 2, 7, 14];
const MONTH_STEPS: &[u32] = &[1, 2, 3, 6, 12];
const DAYS_PER_MONTH: f64 = 30.44;

/// Converts a date into its day number.
pub fn days_from_date(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Converts a day number back into a date (rounding to the nearest day).
pub fn date_from_days(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() {
        return None;
    }
    let days = days.round();
    if days < f64::from(i32::MIN) || days > f64::from(i32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, reason = "range-checked above")]
    let days = days as i32;
    NaiveDate::from_num_days_from_ce_opt(days)
}

/// Returns calendar-aligned tick values inside `[min, max]` (day numbers).
///
/// Spans whose per-tick step is at most two weeks use whole-day steps; longer
/// spans use the first day of every 1, 2, 3, 6 or 12 months.
pub fn nice_date_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step0 = (max - min) / count as f64;

    if let Some(&step) = DAY_STEPS.iter().find(|&&s| f64::from(s) >= step0) {
        let step = f64::from(step);
        let mut out = Vec::new();
        let mut t = (min / step).ceil() * step;
        while t <= max && out.len() < 10_000 {
            out.push(t);
            t += step;
        }
        return out;
    }

    let months = MONTH_STEPS
        .iter()
        .copied()
        .find(|&s| f64::from(s) * DAYS_PER_MONTH >= step0)
        .unwrap_or(12);
    let (Some(first), Some(last)) = (date_from_days(min.floor()), date_from_days(max.ceil()))
    else {
        return Vec::new();
    };

    let mut year = first.year();
    let mut month0 = first.month0();
    // Align to the step so that e.g. quarterly ticks land on Jan/Apr/Jul/Oct.
    month0 -= month0 % months;
    let mut out = Vec::new();
    while out.len() < 10_000 {
        let Some(date) = NaiveDate::from_ymd_opt(year, month0 + 1, 1) else {
            break;
        };
        if date > last {
            break;
        }
        let t = days_from_date(date);
        if t >= min && t <= max {
            out.push(t);
        }
        month0 += months;
        while month0 >= 12 {
            month0 -= 12;
            year += 1;
        }
    }
    out
}

/// Formats a day-number tick given the tick step (in days).
///
/// Month-or-coarser steps print `YYYY-MM`; finer steps print the full date.
pub fn format_date_tick(v: f64, step: f64) -> String {
    let Some(date) = date_from_days(v) else {
        return alloc::format!("{v}");
    };
    if step.abs() >= 28.0 {
        alloc::format!("{:04}-{:02}", date.year(), date.month())
    } else {
        alloc::format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
    }
}
