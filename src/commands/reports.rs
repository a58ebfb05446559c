// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{
    analytics_report, category_analytics, dashboard_stats, health_score, monthly_summary, Period,
};
use crate::db;
use crate::utils::{fmt_money, fmt_pct, id_for_user, maybe_print_json, pretty_table, resolve_as_of};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("analytics", sub)) => analytics(conn, sub)?,
        Some(("monthly", sub)) => monthly(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        Some(("stats", sub)) => stats(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn period_from(sub: &clap::ArgMatches, default: Period) -> Period {
    match sub.get_one::<String>("period") {
        Some(token) => Period::parse_or(token, default),
        None => default,
    }
}

fn user_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<crate::models::Transaction>> {
    let user = sub.get_one::<String>("user").unwrap();
    let user_id = id_for_user(conn, user)?;
    db::transactions_for_user(conn, user_id)
}

fn analytics(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let now = resolve_as_of(sub)?;
    let period = period_from(sub, Period::REPORT_DEFAULT);
    let txns = user_transactions(conn, sub)?;

    let report = analytics_report(&txns, period, now);
    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    let summary_rows = vec![
        vec!["Income growth".into(), fmt_pct(&report.summary.income_growth)],
        vec![
            "Expense reduction".into(),
            fmt_pct(&report.summary.expense_reduction),
        ],
        vec!["Savings rate".into(), fmt_pct(&report.summary.savings_rate)],
        vec![
            "Average transaction".into(),
            fmt_money(&report.summary.average_transaction),
        ],
        vec![
            "Current income".into(),
            fmt_money(&report.totals.current_income),
        ],
        vec![
            "Current expenses".into(),
            fmt_money(&report.totals.current_expenses),
        ],
        vec![
            "Current savings".into(),
            fmt_money(&report.totals.current_savings),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], summary_rows));

    let month_rows = report
        .monthly_breakdown
        .iter()
        .map(|p| {
            vec![
                p.month.clone(),
                fmt_money(&p.income),
                fmt_money(&p.expenses),
                fmt_money(&p.savings),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expenses", "Savings"], month_rows)
    );

    let cat_rows = report
        .category_breakdown
        .iter()
        .map(|c| vec![c.name.clone(), fmt_money(&c.amount), fmt_pct(&c.percentage)])
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Amount", "Share"], cat_rows)
    );

    let health = health_score(&report.summary);
    println!("Financial health: {}/100 ({})", health.total, health.rating);
    Ok(())
}

fn monthly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = *sub.get_one::<i32>("year").unwrap();
    let month = *sub.get_one::<u32>("month").unwrap();
    let txns = user_transactions(conn, sub)?;

    let summary = monthly_summary(&txns, year, month)?;
    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    let rows = summary
        .summary
        .iter()
        .map(|(name, totals)| {
            vec![
                name.clone(),
                fmt_money(&totals.income),
                fmt_money(&totals.expense),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Income", "Expense"], rows));
    println!(
        "{}-{:02}: income {}, expenses {}, net {} ({} transactions)",
        summary.year,
        summary.month,
        fmt_money(&summary.totals.total_income),
        fmt_money(&summary.totals.total_expense),
        fmt_money(&summary.totals.net_amount),
        summary.transaction_count
    );
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let now = resolve_as_of(sub)?;
    let period = period_from(sub, Period::CATEGORY_DEFAULT);
    let txns = user_transactions(conn, sub)?;

    let analytics = category_analytics(&txns, period, now);
    if maybe_print_json(json_flag, jsonl_flag, &analytics)? {
        return Ok(());
    }

    let rows = analytics
        .categories
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                fmt_money(&c.income),
                fmt_money(&c.expense),
                fmt_money(&c.net),
                c.transaction_count.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Income", "Expense", "Net", "Count"], rows)
    );
    println!(
        "Period {}: income {}, expenses {}, net {}",
        analytics.period.as_str(),
        fmt_money(&analytics.totals.total_income),
        fmt_money(&analytics.totals.total_expense),
        fmt_money(&analytics.totals.net_amount)
    );
    Ok(())
}

fn stats(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let now = resolve_as_of(sub)?;
    let txns = user_transactions(conn, sub)?;

    let stats = dashboard_stats(&txns, now);
    if maybe_print_json(json_flag, jsonl_flag, &stats)? {
        return Ok(());
    }

    let rows = vec![
        vec!["Monthly income".into(), fmt_money(&stats.monthly_income)],
        vec!["Monthly expenses".into(), fmt_money(&stats.monthly_expenses)],
        vec!["Monthly net".into(), fmt_money(&stats.monthly_net)],
        vec!["Total balance".into(), fmt_money(&stats.total_balance)],
        vec![
            "Transactions this month".into(),
            stats.transaction_count.to_string(),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));

    if !stats.category_breakdown.is_empty() {
        let cat_rows = stats
            .category_breakdown
            .iter()
            .map(|(name, amount)| vec![name.clone(), fmt_money(amount)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], cat_rows));
    }
    Ok(())
}
