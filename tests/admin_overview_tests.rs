// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tallybook::analytics::admin::{monthly_trends, TOP_CATEGORY_LIMIT};
use tallybook::analytics::admin_overview;
use tallybook::models::{Transaction, TransactionKind, User};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(user_id: i64, y: i32, m: u32, d: u32, amount: &str, kind: TransactionKind, category: &str) -> Transaction {
    Transaction {
        id: 0,
        date: date(y, m, d),
        amount: dec(amount),
        kind,
        category: category.into(),
        user_id,
        note: None,
    }
}

fn user(id: i64, name: &str, created: NaiveDate) -> User {
    User {
        id,
        name: name.into(),
        created_at: created,
    }
}

#[test]
fn overview_counts_and_totals() {
    let now = date(2024, 5, 20);
    let users = vec![
        user(1, "ana", date(2023, 1, 1)),
        user(2, "ben", date(2024, 5, 10)),
        user(3, "cho", date(2024, 4, 25)),
    ];
    let txns = vec![
        tx(1, 2024, 5, 1, "1000", TransactionKind::Income, "Salary"),
        tx(2, 2024, 5, 2, "300", TransactionKind::Expense, "Food"),
        tx(3, 2024, 4, 8, "200", TransactionKind::Expense, "Rent"),
    ];
    let overview = admin_overview(&txns, &users, now);

    let o = &overview.overview;
    assert_eq!(o.total_users, 3);
    assert_eq!(o.total_transactions, 3);
    // ben and cho registered inside the 30-day window.
    assert_eq!(o.recent_users, 2);
    assert_eq!(o.total_income, dec("1000"));
    assert_eq!(o.total_expense, dec("500"));
    assert_eq!(o.net_amount, dec("500"));
}

#[test]
fn top_categories_rank_expenses_and_cap_at_ten() {
    let mut txns = Vec::new();
    for i in 0..12 {
        txns.push(tx(
            1,
            2024,
            5,
            1 + i as u32,
            &format!("{}", 100 + i),
            TransactionKind::Expense,
            &format!("Cat{:02}", i),
        ));
    }
    // Income never ranks.
    txns.push(tx(1, 2024, 5, 15, "9999", TransactionKind::Income, "Salary"));

    let overview = admin_overview(&txns, &[], date(2024, 5, 20));
    let top = &overview.top_categories;
    assert_eq!(top.len(), TOP_CATEGORY_LIMIT);
    assert_eq!(top[0].name, "Cat11");
    assert_eq!(top[0].total_amount, dec("111"));
    assert_eq!(top[0].transaction_count, 1);
    // Descending throughout.
    assert!(top.windows(2).all(|w| w[0].total_amount >= w[1].total_amount));
    assert!(top.iter().all(|c| c.name != "Salary"));
}

#[test]
fn trend_is_zero_filled_and_ascending() {
    let txns = vec![
        tx(1, 2024, 2, 10, "500", TransactionKind::Income, "Salary"),
        tx(2, 2024, 2, 11, "125", TransactionKind::Expense, "Food"),
    ];
    let trend = monthly_trends(&txns, 6, date(2024, 5, 20));

    assert_eq!(trend.len(), 6);
    assert_eq!((trend[0].year, trend[0].month), (2023, 12));
    assert_eq!((trend[5].year, trend[5].month), (2024, 5));

    let feb = &trend[2];
    assert_eq!((feb.year, feb.month), (2024, 2));
    assert_eq!(feb.income, dec("500"));
    assert_eq!(feb.expense, dec("125"));
    assert_eq!(feb.transaction_count, 2);

    // Silent months report zeros rather than going missing.
    assert_eq!(trend[1].income, Decimal::ZERO);
    assert_eq!(trend[1].transaction_count, 0);
}

#[test]
fn trend_window_is_configurable() {
    let trend = monthly_trends(&[], 12, date(2024, 5, 20));
    assert_eq!(trend.len(), 12);
    assert_eq!((trend[0].year, trend[0].month), (2023, 6));
}
