// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::analytics::categories::{expense_breakdown, CategorySlice};
use crate::analytics::period::{in_month, month_label, month_start, month_window, shift_month_start, Period};
use crate::analytics::sums::{expense_total, income_total};
use crate::models::Transaction;

/// Rounds to one decimal place, half away from zero. Used for percentages.
pub fn round1(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to two decimal places, half away from zero. Used for currency.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub income_growth: Decimal,
    pub expense_reduction: Decimal,
    pub savings_rate: Decimal,
    pub average_transaction: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthPoint {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub current_income: Decimal,
    pub current_expenses: Decimal,
    pub current_savings: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub summary: Summary,
    pub monthly_breakdown: Vec<MonthPoint>,
    pub category_breakdown: Vec<CategorySlice>,
    pub totals: Totals,
}

/// Months covered by the report's breakdown series, independent of the
/// requested period.
pub const BREAKDOWN_MONTHS: u32 = 6;

/// Full report for the reports view: growth/savings summary, a fixed
/// six-month breakdown series, and the current month's expense split by
/// category. Pure in its inputs; `now` anchors every date boundary.
pub fn analytics_report(transactions: &[Transaction], period: Period, now: NaiveDate) -> AnalyticsReport {
    let start = period.start_date(now);
    let in_period: Vec<&Transaction> = transactions.iter().filter(|t| t.date >= start).collect();

    let current_start = month_start(now);
    let previous_start = shift_month_start(now, -1);

    let current: Vec<&Transaction> = in_period
        .iter()
        .copied()
        .filter(|t| in_month(t.date, current_start))
        .collect();
    let previous: Vec<&Transaction> = in_period
        .iter()
        .copied()
        .filter(|t| in_month(t.date, previous_start))
        .collect();

    let current_income = income_total(current.iter().copied());
    let current_expenses = expense_total(current.iter().copied());
    let previous_income = income_total(previous.iter().copied());
    let previous_expenses = expense_total(previous.iter().copied());

    let hundred = Decimal::ONE_HUNDRED;
    let income_growth = if previous_income > Decimal::ZERO {
        round1((current_income - previous_income) / previous_income * hundred)
    } else {
        Decimal::ZERO
    };
    let expense_reduction = if previous_expenses > Decimal::ZERO {
        round1((previous_expenses - current_expenses) / previous_expenses * hundred)
    } else {
        Decimal::ZERO
    };
    let savings_rate = if current_income > Decimal::ZERO {
        round1((current_income - current_expenses) / current_income * hundred)
    } else {
        Decimal::ZERO
    };
    let average_transaction = if current.is_empty() {
        Decimal::ZERO
    } else {
        round2((current_income + current_expenses) / Decimal::from(current.len() as u64))
    };

    // The breakdown always spans six calendar months, taken from the full
    // input set rather than the period-filtered one.
    let monthly_breakdown = month_window(now, BREAKDOWN_MONTHS)
        .into_iter()
        .map(|start| {
            let month: Vec<&Transaction> = transactions
                .iter()
                .filter(|t| in_month(t.date, start))
                .collect();
            let income = income_total(month.iter().copied());
            let expenses = expense_total(month.iter().copied());
            MonthPoint {
                month: month_label(start).to_string(),
                income,
                expenses,
                savings: income - expenses,
            }
        })
        .collect();

    let category_breakdown = expense_breakdown(current.iter().copied(), current_expenses);

    AnalyticsReport {
        summary: Summary {
            income_growth,
            expense_reduction,
            savings_rate,
            average_transaction,
        },
        monthly_breakdown,
        category_breakdown,
        totals: Totals {
            current_income,
            current_expenses,
            current_savings: current_income - current_expenses,
        },
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScore {
    pub savings_score: Decimal,
    pub expense_control_score: Decimal,
    pub consistency_score: Decimal,
    pub total: i64,
    pub rating: &'static str,
}

/// Composite 0-100 financial health indicator shown alongside the report.
/// A negative savings rate can pull the savings component below zero.
pub fn health_score(summary: &Summary) -> HealthScore {
    let savings_score = (summary.savings_rate / Decimal::from(30) * Decimal::from(40))
        .min(Decimal::from(40));
    let expense_control_score = (summary.expense_reduction.max(Decimal::from(-20))
        + Decimal::from(20))
    .min(Decimal::from(30));
    let consistency_score = Decimal::from(30);

    let total = (savings_score + expense_control_score + consistency_score)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0);

    let rating = if total >= 80 {
        "Excellent"
    } else if total >= 60 {
        "Good"
    } else if total >= 40 {
        "Fair"
    } else {
        "Needs Improvement"
    };

    HealthScore {
        savings_score,
        expense_control_score,
        consistency_score,
        total,
        rating,
    }
}
