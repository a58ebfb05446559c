// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tallybook::analytics::report::{health_score, Summary};
use tallybook::analytics::{analytics_report, Period};
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

fn scenario_a() -> Vec<Transaction> {
    vec![
        tx(2024, 5, 1, "1000", TransactionKind::Income, "Salary"),
        tx(2024, 5, 10, "400", TransactionKind::Expense, "Food"),
        tx(2024, 4, 1, "800", TransactionKind::Income, "Salary"),
        tx(2024, 4, 15, "500", TransactionKind::Expense, "Food"),
    ]
}

#[test]
fn report_matches_hand_computed_figures() {
    let now = date(2024, 5, 20);
    let report = analytics_report(&scenario_a(), Period::OneMonth, now);

    assert_eq!(report.totals.current_income, dec("1000"));
    assert_eq!(report.totals.current_expenses, dec("400"));
    assert_eq!(report.totals.current_savings, dec("600"));

    assert_eq!(report.summary.income_growth, dec("25.0"));
    assert_eq!(report.summary.expense_reduction, dec("20.0"));
    assert_eq!(report.summary.savings_rate, dec("60.0"));
    // (1000 + 400) / 2 transactions
    assert_eq!(report.summary.average_transaction, dec("700.00"));
}

#[test]
fn breakdown_spans_six_months_oldest_first() {
    let now = date(2024, 5, 20);
    let report = analytics_report(&scenario_a(), Period::OneMonth, now);

    let labels: Vec<&str> = report
        .monthly_breakdown
        .iter()
        .map(|p| p.month.as_str())
        .collect();
    assert_eq!(labels, ["Dec", "Jan", "Feb", "Mar", "Apr", "May"]);

    let april = &report.monthly_breakdown[4];
    assert_eq!(april.income, dec("800"));
    assert_eq!(april.expenses, dec("500"));
    assert_eq!(april.savings, dec("300"));

    let december = &report.monthly_breakdown[0];
    assert_eq!(december.income, Decimal::ZERO);
    assert_eq!(december.expenses, Decimal::ZERO);
    assert_eq!(december.savings, Decimal::ZERO);
}

#[test]
fn breakdown_ignores_the_period_start() {
    // A 1month period only reaches back to April, but the series still
    // reports January's activity.
    let mut txns = scenario_a();
    txns.push(tx(2024, 1, 10, "250", TransactionKind::Expense, "Travel"));
    let report = analytics_report(&txns, Period::OneMonth, date(2024, 5, 20));

    assert_eq!(report.monthly_breakdown[1].month, "Jan");
    assert_eq!(report.monthly_breakdown[1].expenses, dec("250"));
}

#[test]
fn empty_history_reports_zeros_not_errors() {
    let report = analytics_report(&[], Period::SixMonths, date(2024, 5, 20));

    assert_eq!(report.summary.income_growth, Decimal::ZERO);
    assert_eq!(report.summary.expense_reduction, Decimal::ZERO);
    assert_eq!(report.summary.savings_rate, Decimal::ZERO);
    assert_eq!(report.summary.average_transaction, Decimal::ZERO);
    assert_eq!(report.totals.current_income, Decimal::ZERO);
    assert_eq!(report.totals.current_expenses, Decimal::ZERO);
    assert_eq!(report.totals.current_savings, Decimal::ZERO);

    assert_eq!(report.monthly_breakdown.len(), 6);
    assert!(report
        .monthly_breakdown
        .iter()
        .all(|p| p.income == Decimal::ZERO && p.expenses == Decimal::ZERO));
    assert!(report.category_breakdown.is_empty());
}

#[test]
fn single_category_takes_the_full_share() {
    let txns = vec![tx(2024, 5, 10, "400", TransactionKind::Expense, "Food")];
    let report = analytics_report(&txns, Period::OneMonth, date(2024, 5, 20));

    assert_eq!(report.category_breakdown.len(), 1);
    let food = &report.category_breakdown[0];
    assert_eq!(food.name, "Food");
    assert_eq!(food.amount, dec("400"));
    assert_eq!(food.percentage, dec("100"));
}

#[test]
fn zero_previous_income_means_zero_growth() {
    let txns = vec![tx(2024, 5, 3, "500", TransactionKind::Income, "Salary")];
    let report = analytics_report(&txns, Period::OneMonth, date(2024, 5, 20));
    assert_eq!(report.summary.income_growth, Decimal::ZERO);
}

#[test]
fn category_percentages_sum_to_one_hundred() {
    let txns = vec![
        tx(2024, 5, 1, "100", TransactionKind::Expense, "Food"),
        tx(2024, 5, 2, "100", TransactionKind::Expense, "Travel"),
        tx(2024, 5, 3, "100", TransactionKind::Expense, "Rent"),
    ];
    let report = analytics_report(&txns, Period::OneMonth, date(2024, 5, 20));
    let sum: Decimal = report
        .category_breakdown
        .iter()
        .map(|c| c.percentage)
        .sum();
    assert!((sum - dec("100")).abs() < dec("0.000001"), "sum was {}", sum);
}

#[test]
fn rounding_is_half_away_from_zero() {
    // (2205 - 2000) / 2000 * 100 = 10.25 -> 10.3 at one decimal
    let txns = vec![
        tx(2024, 4, 1, "2000", TransactionKind::Income, "Salary"),
        tx(2024, 5, 1, "2205", TransactionKind::Income, "Salary"),
    ];
    let report = analytics_report(&txns, Period::OneMonth, date(2024, 5, 20));
    assert_eq!(report.summary.income_growth, dec("10.3"));

    // (60.03 + 40.02) / 2 = 50.025 -> 50.03 at two decimals
    let txns = vec![
        tx(2024, 5, 1, "60.03", TransactionKind::Income, "Salary"),
        tx(2024, 5, 2, "40.02", TransactionKind::Expense, "Food"),
    ];
    let report = analytics_report(&txns, Period::OneMonth, date(2024, 5, 20));
    assert_eq!(report.summary.average_transaction, dec("50.03"));
}

#[test]
fn repeated_calls_yield_identical_results() {
    let txns = scenario_a();
    let now = date(2024, 5, 20);
    let a = analytics_report(&txns, Period::SixMonths, now);
    let b = analytics_report(&txns, Period::SixMonths, now);
    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
}

fn summary(savings_rate: &str, expense_reduction: &str) -> Summary {
    Summary {
        income_growth: Decimal::ZERO,
        expense_reduction: dec(expense_reduction),
        savings_rate: dec(savings_rate),
        average_transaction: Decimal::ZERO,
    }
}

#[test]
fn health_score_bands() {
    // 40 + 30 + 30
    let excellent = health_score(&summary("60", "20"));
    assert_eq!(excellent.total, 100);
    assert_eq!(excellent.rating, "Excellent");

    // 30 + 0 + 30, lower band edge of Good
    let good = health_score(&summary("22.5", "-20"));
    assert_eq!(good.total, 60);
    assert_eq!(good.rating, "Good");

    // 0 + 20 + 30
    let fair = health_score(&summary("0", "0"));
    assert_eq!(fair.total, 50);
    assert_eq!(fair.rating, "Fair");

    // -40 + 20 + 30
    let poor = health_score(&summary("-30", "0"));
    assert_eq!(poor.total, 10);
    assert_eq!(poor.rating, "Needs Improvement");
}

#[test]
fn health_score_from_scenario_report() {
    let report = analytics_report(&scenario_a(), Period::OneMonth, date(2024, 5, 20));
    // Savings rate 60 caps the savings component, reduction 20 caps control.
    let health = health_score(&report.summary);
    assert_eq!(health.total, 100);
    assert_eq!(health.rating, "Excellent");
}
