// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::period::Period;
use crate::models::{Transaction, TransactionKind};

#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub amount: Decimal,
    /// Share of total expenses, unrounded; presentation rounds for display.
    pub percentage: Decimal,
}

/// Groups expense magnitudes by category and ranks descending by amount.
/// Ties keep first-encountered order, so accumulation is order-preserving
/// rather than hashed.
pub fn expense_breakdown<'a, I>(txns: I, total_expenses: Decimal) -> Vec<CategorySlice>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut groups: Vec<(String, Decimal)> = Vec::new();
    for t in txns {
        if t.kind != TransactionKind::Expense {
            continue;
        }
        match groups.iter().position(|(name, _)| *name == t.category) {
            Some(i) => groups[i].1 += t.amount.abs(),
            None => groups.push((t.category.clone(), t.amount.abs())),
        }
    }

    let mut slices: Vec<CategorySlice> = groups
        .into_iter()
        .map(|(name, amount)| CategorySlice {
            name,
            amount,
            percentage: if total_expenses > Decimal::ZERO {
                amount / total_expenses * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            },
        })
        .collect();
    slices.sort_by(|a, b| b.amount.cmp(&a.amount));
    slices
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryActivity {
    pub name: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateTotals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryAnalytics {
    pub categories: Vec<CategoryActivity>,
    pub totals: AggregateTotals,
    pub period: Period,
}

/// Per-category income/expense activity over the requested period,
/// descending by expense. Both directions accumulate magnitudes.
pub fn category_analytics(transactions: &[Transaction], period: Period, now: NaiveDate) -> CategoryAnalytics {
    let start = period.category_start_date(now);

    let mut categories: Vec<CategoryActivity> = Vec::new();
    for t in transactions.iter().filter(|t| t.date >= start) {
        let idx = match categories.iter().position(|c| c.name == t.category) {
            Some(i) => i,
            None => {
                categories.push(CategoryActivity {
                    name: t.category.clone(),
                    income: Decimal::ZERO,
                    expense: Decimal::ZERO,
                    net: Decimal::ZERO,
                    transaction_count: 0,
                });
                categories.len() - 1
            }
        };
        let entry = &mut categories[idx];
        match t.kind {
            TransactionKind::Income => entry.income += t.amount.abs(),
            TransactionKind::Expense => entry.expense += t.amount.abs(),
        }
        entry.transaction_count += 1;
    }
    for entry in &mut categories {
        entry.net = entry.income - entry.expense;
    }
    categories.sort_by(|a, b| b.expense.cmp(&a.expense));

    let total_income: Decimal = categories.iter().map(|c| c.income).sum();
    let total_expense: Decimal = categories.iter().map(|c| c.expense).sum();

    CategoryAnalytics {
        categories,
        totals: AggregateTotals {
            total_income,
            total_expense,
            net_amount: total_income - total_expense,
        },
        period,
    }
}
