// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::analytics::categories::AggregateTotals;
use crate::analytics::period::in_month;
use crate::analytics::AnalyticsError;
use crate::models::{Transaction, TransactionKind};

#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub summary: BTreeMap<String, CategoryTotals>,
    pub totals: AggregateTotals,
    pub transaction_count: usize,
}

/// Single-month income/expense breakdown by category for one user's
/// transactions. `month` is 1-based; an out-of-range pair is the one
/// condition this engine refuses to compute.
pub fn monthly_summary(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> Result<MonthlySummary, AnalyticsError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(AnalyticsError::InvalidMonth { year, month })?;

    let mut summary: BTreeMap<String, CategoryTotals> = BTreeMap::new();
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut transaction_count = 0usize;

    for t in transactions.iter().filter(|t| in_month(t.date, start)) {
        let entry = summary.entry(t.category.clone()).or_default();
        match t.kind {
            TransactionKind::Income => {
                entry.income += t.amount;
                total_income += t.amount;
            }
            TransactionKind::Expense => {
                entry.expense += t.amount.abs();
                total_expense += t.amount.abs();
            }
        }
        transaction_count += 1;
    }

    Ok(MonthlySummary {
        year,
        month,
        summary,
        totals: AggregateTotals {
            total_income,
            total_expense,
            net_amount: total_income - total_expense,
        },
        transaction_count,
    })
}
