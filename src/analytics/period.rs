// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Symbolic report window, anchored at an explicit reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
}

impl Period {
    /// Default for the full analytics report.
    pub const REPORT_DEFAULT: Period = Period::SixMonths;
    /// Default for category analytics.
    pub const CATEGORY_DEFAULT: Period = Period::OneMonth;

    /// Parses a period token; unrecognized tokens fall back to `default`.
    pub fn parse_or(token: &str, default: Period) -> Period {
        match token {
            "1month" => Period::OneMonth,
            "3months" => Period::ThreeMonths,
            "6months" => Period::SixMonths,
            "1year" => Period::OneYear,
            _ => default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::OneMonth => "1month",
            Period::ThreeMonths => "3months",
            Period::SixMonths => "6months",
            Period::OneYear => "1year",
        }
    }

    fn months_back(self) -> i32 {
        match self {
            Period::OneMonth => 1,
            Period::ThreeMonths => 3,
            Period::SixMonths => 6,
            Period::OneYear => 12,
        }
    }

    /// First day of the month N months before the month of `now`.
    /// No end bound is implied; the window runs to "now".
    pub fn start_date(self, now: NaiveDate) -> NaiveDate {
        shift_month_start(now, -self.months_back())
    }

    /// Category-analytics variant: `1month` means the current month
    /// (N = 0); longer periods resolve as [`Period::start_date`].
    pub fn category_start_date(self, now: NaiveDate) -> NaiveDate {
        match self {
            Period::OneMonth => month_start(now),
            _ => self.start_date(now),
        }
    }
}

/// First calendar day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 of an in-range year always exists.
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// First day of the month `offset` months away from the month of `date`.
pub fn shift_month_start(date: NaiveDate, offset: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + offset;
    NaiveDate::from_ymd_opt(months.div_euclid(12), months.rem_euclid(12) as u32 + 1, 1).unwrap()
}

/// True when `date` falls inside the calendar month starting at `start`.
pub fn in_month(date: NaiveDate, start: NaiveDate) -> bool {
    date >= start && date < shift_month_start(start, 1)
}

/// Month starts for the `count` calendar months ending at the month of
/// `now`, oldest first.
pub fn month_window(now: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (0..count as i32)
        .rev()
        .map(|i| shift_month_start(now, -i))
        .collect()
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// English abbreviated month name. Any other locale is a caller concern,
/// never read from the environment.
pub fn month_label(date: NaiveDate) -> &'static str {
    MONTH_LABELS[date.month0() as usize]
}
