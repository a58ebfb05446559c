// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::admin_overview;
use crate::db;
use crate::utils::{fmt_money, maybe_print_json, pretty_table, resolve_as_of};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("overview", sub)) => overview(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn overview(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let now = resolve_as_of(sub)?;

    let transactions = db::all_transactions(conn)?;
    let users = db::all_users(conn)?;
    let overview = admin_overview(&transactions, &users, now);
    if maybe_print_json(json_flag, jsonl_flag, &overview)? {
        return Ok(());
    }

    let o = &overview.overview;
    let rows = vec![
        vec!["Users".into(), o.total_users.to_string()],
        vec!["Recent users (30d)".into(), o.recent_users.to_string()],
        vec!["Transactions".into(), o.total_transactions.to_string()],
        vec!["Total income".into(), fmt_money(&o.total_income)],
        vec!["Total expenses".into(), fmt_money(&o.total_expense)],
        vec!["Net".into(), fmt_money(&o.net_amount)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));

    let cat_rows = overview
        .top_categories
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                fmt_money(&c.total_amount),
                c.transaction_count.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Top category", "Spent", "Count"], cat_rows)
    );

    let trend_rows = overview
        .monthly_trends
        .iter()
        .map(|t| {
            vec![
                format!("{}-{:02}", t.year, t.month),
                fmt_money(&t.income),
                fmt_money(&t.expense),
                t.transaction_count.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expense", "Count"], trend_rows)
    );
    Ok(())
}
