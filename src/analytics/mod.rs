// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over in-memory transaction slices. Every function
//! takes an explicit reference date; nothing in here reads the clock,
//! performs I/O, or mutates its inputs.

pub mod admin;
pub mod categories;
pub mod monthly;
pub mod period;
pub mod report;
pub mod stats;
pub mod sums;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Invalid month {month} for year {year} (expected 1-12)")]
    InvalidMonth { year: i32, month: u32 },
}

pub use admin::{admin_overview, AdminOverview};
pub use categories::{category_analytics, CategoryAnalytics};
pub use monthly::{monthly_summary, MonthlySummary};
pub use period::Period;
pub use report::{analytics_report, health_score, AnalyticsReport, HealthScore};
pub use stats::{dashboard_stats, DashboardStats};
