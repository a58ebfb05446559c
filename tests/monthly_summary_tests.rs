// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tallybook::analytics::{monthly_summary, AnalyticsError};
use tallybook::models::{Transaction, TransactionKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(y: i32, m: u32, d: u32, amount: &str, kind: TransactionKind, category: &str) -> Transaction {
    Transaction {
        id: 0,
        date: date(y, m, d),
        amount: dec(amount),
        kind,
        category: category.into(),
        user_id: 1,
        note: None,
    }
}

#[test]
fn splits_the_month_by_category() {
    let txns = vec![
        tx(2024, 3, 1, "2000", TransactionKind::Income, "Salary"),
        tx(2024, 3, 5, "600", TransactionKind::Expense, "Rent"),
        tx(2024, 3, 9, "150", TransactionKind::Expense, "Food"),
        tx(2024, 3, 21, "50", TransactionKind::Expense, "Food"),
        // Neighboring months stay out.
        tx(2024, 2, 29, "999", TransactionKind::Expense, "Rent"),
        tx(2024, 4, 1, "999", TransactionKind::Income, "Salary"),
    ];
    let summary = monthly_summary(&txns, 2024, 3).unwrap();

    assert_eq!(summary.year, 2024);
    assert_eq!(summary.month, 3);
    assert_eq!(summary.transaction_count, 4);

    let food = &summary.summary["Food"];
    assert_eq!(food.income, Decimal::ZERO);
    assert_eq!(food.expense, dec("200"));
    let salary = &summary.summary["Salary"];
    assert_eq!(salary.income, dec("2000"));
    assert_eq!(salary.expense, Decimal::ZERO);

    assert_eq!(summary.totals.total_income, dec("2000"));
    assert_eq!(summary.totals.total_expense, dec("800"));
    assert_eq!(summary.totals.net_amount, dec("1200"));
}

#[test]
fn empty_month_is_a_valid_zero_result() {
    let summary = monthly_summary(&[], 2024, 7).unwrap();
    assert!(summary.summary.is_empty());
    assert_eq!(summary.transaction_count, 0);
    assert_eq!(summary.totals.total_income, Decimal::ZERO);
    assert_eq!(summary.totals.total_expense, Decimal::ZERO);
}

#[test]
fn out_of_range_months_are_rejected() {
    assert_eq!(
        monthly_summary(&[], 2024, 13).unwrap_err(),
        AnalyticsError::InvalidMonth {
            year: 2024,
            month: 13
        }
    );
    assert_eq!(
        monthly_summary(&[], 2024, 0).unwrap_err(),
        AnalyticsError::InvalidMonth {
            year: 2024,
            month: 0
        }
    );
}
