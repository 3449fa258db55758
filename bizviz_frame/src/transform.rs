// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouping and ordering helpers.
//!
//! These cover the little data shaping the charts do themselves: collapsing
//! repeated categories, and ordering rows for display.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use chrono::NaiveDate;
use hashbrown::HashMap;

use crate::stats;

/// Aggregation applied per group by [`group_by_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    /// Sum values (skips non-finite).
    Sum,
    /// Mean value (skips non-finite).
    Mean,
}

/// Sorting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

/// Output of [`group_by_text`]: one key and one aggregate per distinct key.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped {
    /// Distinct keys in first-seen order.
    pub keys: Vec<String>,
    /// Aggregated value per key.
    pub values: Vec<f64>,
}

/// Groups `values` by `keys` and aggregates each group.
///
/// Groups keep the order in which their key first appears. Extra elements in
/// the longer input are ignored.
pub fn group_by_text(keys: &[String], values: &[f64], op: AggregateOp) -> Grouped {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut members: Vec<Vec<f64>> = Vec::new();

    for (key, &value) in keys.iter().zip(values) {
        let slot = *index.entry(key.as_str()).or_insert_with(|| {
            order.push(key.clone());
            members.push(Vec::new());
            order.len() - 1
        });
        members[slot].push(value);
    }

    let values = members
        .iter()
        .map(|m| match op {
            AggregateOp::Sum => stats::sum(m),
            AggregateOp::Mean => stats::mean(m),
        })
        .collect();

    Grouped {
        keys: order,
        values,
    }
}

/// Stable row order that sorts `values`; `NaN`s go last in either order.
pub fn argsort_f64(values: &[f64], order: SortOrder) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| {
        let (va, vb) = (values[a], values[b]);
        match (va.is_nan(), vb.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => match order {
                SortOrder::Asc => va.total_cmp(&vb),
                SortOrder::Desc => vb.total_cmp(&va),
            },
        }
    });
    idx
}

/// Stable row order that sorts `dates` ascending.
pub fn argsort_dates(dates: &[NaiveDate]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..dates.len()).collect();
    idx.sort_by_key(|&i| dates[i]);
    idx
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn keys(k: &[&str]) -> Vec<String> {
        k.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let g = group_by_text(
            &keys(&["SP", "RJ", "SP", "MG"]),
            &[1.0, 2.0, 3.0, 4.0],
            AggregateOp::Mean,
        );
        assert_eq!(g.keys, keys(&["SP", "RJ", "MG"]));
        assert_eq!(g.values, vec![2.0, 2.0, 4.0]);

        let g = group_by_text(&keys(&["a", "a"]), &[1.0, 2.0], AggregateOp::Sum);
        assert_eq!(g.values, vec![3.0]);
    }

    #[test]
    fn argsort_is_stable_and_puts_nan_last() {
        let v = [3.0, f64::NAN, 1.0, 3.0];
        assert_eq!(argsort_f64(&v, SortOrder::Asc), vec![2, 0, 3, 1]);
        assert_eq!(argsort_f64(&v, SortOrder::Desc), vec![0, 3, 2, 1]);
    }

    #[test]
    fn argsort_dates_ascending() {
        let d = |day| NaiveDate::from_ymd_opt(2017, 1, day).unwrap();
        assert_eq!(argsort_dates(&[d(3), d(1), d(2)]), vec![1, 2, 0]);
    }
}
