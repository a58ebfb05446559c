// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::period::{in_month, month_window};
use crate::analytics::sums::{expense_total, income_total};
use crate::models::{Transaction, TransactionKind, User};

/// Ranking cap for the global top-spending-categories list.
pub const TOP_CATEGORY_LIMIT: usize = 10;
/// Default trend window, in calendar months.
pub const TREND_MONTHS: u32 = 6;
/// Window for the "recent users" figure, in days.
const RECENT_USER_DAYS: u64 = 30;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewTotals {
    pub total_users: usize,
    pub total_transactions: usize,
    pub recent_users: usize,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCategory {
    pub name: String,
    pub total_amount: Decimal,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub year: i32,
    pub month: u32,
    pub income: Decimal,
    pub expense: Decimal,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub overview: OverviewTotals,
    pub top_categories: Vec<TopCategory>,
    pub monthly_trends: Vec<TrendPoint>,
}

/// Global aggregates over every user's transactions: lifetime totals,
/// top spending categories, and the recent monthly trend.
pub fn admin_overview(transactions: &[Transaction], users: &[User], now: NaiveDate) -> AdminOverview {
    let thirty_days_ago = now
        .checked_sub_days(Days::new(RECENT_USER_DAYS))
        .unwrap_or(now);
    let recent_users = users
        .iter()
        .filter(|u| u.created_at >= thirty_days_ago)
        .count();

    AdminOverview {
        overview: OverviewTotals {
            total_users: users.len(),
            total_transactions: transactions.len(),
            recent_users,
            total_income: income_total(transactions),
            total_expense: expense_total(transactions),
            net_amount: income_total(transactions) - expense_total(transactions),
        },
        top_categories: top_categories(transactions),
        monthly_trends: monthly_trends(transactions, TREND_MONTHS, now),
    }
}

/// Expense totals grouped by category across all users, descending,
/// capped at [`TOP_CATEGORY_LIMIT`]. Ties keep first-encountered order.
pub fn top_categories(transactions: &[Transaction]) -> Vec<TopCategory> {
    let mut groups: Vec<TopCategory> = Vec::new();
    for t in transactions {
        if t.kind != TransactionKind::Expense {
            continue;
        }
        match groups.iter().position(|g| g.name == t.category) {
            Some(i) => {
                groups[i].total_amount += t.amount.abs();
                groups[i].transaction_count += 1;
            }
            None => groups.push(TopCategory {
                name: t.category.clone(),
                total_amount: t.amount.abs(),
                transaction_count: 1,
            }),
        }
    }
    groups.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
    groups.truncate(TOP_CATEGORY_LIMIT);
    groups
}

/// Per-month global sums for the `months` calendar months ending at the
/// month of `now`, oldest first. Months with no activity report zeros.
pub fn monthly_trends(transactions: &[Transaction], months: u32, now: NaiveDate) -> Vec<TrendPoint> {
    month_window(now, months)
        .into_iter()
        .map(|start| {
            let month: Vec<&Transaction> = transactions
                .iter()
                .filter(|t| in_month(t.date, start))
                .collect();
            TrendPoint {
                year: start.year(),
                month: start.month(),
                income: income_total(month.iter().copied()),
                expense: expense_total(month.iter().copied()),
                transaction_count: month.len(),
            }
        })
        .collect()
}
