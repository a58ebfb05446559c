// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::analytics::period::{in_month, month_start};
use crate::analytics::sums::{expense_total, income_total, net_total};
use crate::models::{Transaction, TransactionKind};

#[derive(Debug, Clone, Serialize)]
pub struct StatsPeriod {
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub monthly_net: Decimal,
    pub total_balance: Decimal,
    pub transaction_count: usize,
    pub category_breakdown: BTreeMap<String, Decimal>,
    pub period: StatsPeriod,
}

/// Current-month headline figures for the dashboard, plus the running
/// balance over the full history.
pub fn dashboard_stats(transactions: &[Transaction], now: NaiveDate) -> DashboardStats {
    let start = month_start(now);
    let monthly: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| in_month(t.date, start))
        .collect();

    let monthly_income = income_total(monthly.iter().copied());
    let monthly_expenses = expense_total(monthly.iter().copied());

    let mut category_breakdown: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in &monthly {
        if t.kind == TransactionKind::Expense {
            *category_breakdown.entry(t.category.clone()).or_default() += t.amount.abs();
        }
    }

    DashboardStats {
        monthly_income,
        monthly_expenses,
        monthly_net: monthly_income - monthly_expenses,
        total_balance: net_total(transactions),
        transaction_count: monthly.len(),
        category_breakdown,
        period: StatsPeriod {
            month: now.month(),
            year: now.year(),
        },
    }
}
