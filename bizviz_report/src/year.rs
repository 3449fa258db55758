// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::ReportError;

/// A year covered by the order dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReportYear {
    /// 2016.
    Y2016,
    /// 2017.
    Y2017,
    /// 2018.
    Y2018,
}

impl ReportYear {
    /// All supported years, oldest first.
    pub const ALL: [Self; 3] = [Self::Y2016, Self::Y2017, Self::Y2018];

    /// The calendar year.
    pub const fn get(self) -> i32 {
        match self {
            Self::Y2016 => 2016,
            Self::Y2017 => 2017,
            Self::Y2018 => 2018,
        }
    }

    /// Column prefix used by the per-year query results, e.g. `Year2017`.
    pub fn column_prefix(self) -> String {
        format!("Year{}", self.get())
    }
}

impl TryFrom<i32> for ReportYear {
    type Error = ReportError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        match year {
            2016 => Ok(Self::Y2016),
            2017 => Ok(Self::Y2017),
            2018 => Ok(Self::Y2018),
            other => Err(ReportError::UnsupportedYear(other)),
        }
    }
}

impl fmt::Display for ReportYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_dataset_years_convert() {
        assert_eq!(ReportYear::try_from(2017).ok(), Some(ReportYear::Y2017));
        assert!(matches!(
            ReportYear::try_from(2019),
            Err(ReportError::UnsupportedYear(2019))
        ));
        assert_eq!(ReportYear::Y2018.column_prefix(), "Year2018");
    }
}
