// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionKind;
use crate::utils::{
    id_for_user, maybe_print_json, parse_amount, parse_category, parse_date, pretty_table,
};
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::Serialize;
use std::str::FromStr;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let kind = TransactionKind::from_str(sub.get_one::<String>("kind").unwrap())?;
    let category = parse_category(sub.get_one::<String>("category").unwrap())?;
    let user = sub.get_one::<String>("user").unwrap();
    let note = sub.get_one::<String>("note").map(|s| s.to_string());

    let user_id = id_for_user(conn, user)?;
    conn.execute(
        "INSERT INTO transactions(date, amount, kind, category, user_id, note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            date.to_string(),
            amount.to_string(),
            kind.as_str(),
            category,
            user_id,
            note
        ],
    )?;
    println!(
        "Recorded {} {} on {} in '{}' (user: {})",
        kind.as_str(),
        amount,
        date,
        category,
        user
    );
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if n == 0 {
        println!("No transaction with id {}", id);
    } else {
        println!("Removed transaction {}", id);
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.user.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "User", "Kind", "Amount", "Category", "Note"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub user: String,
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub note: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT t.id, t.date, u.name, t.kind, t.amount, t.category, t.note FROM transactions t LEFT JOIN users u ON t.user_id=u.id WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(user) = sub.get_one::<String>("user") {
        sql.push_str(" AND u.name=?");
        params_vec.push(user.into());
    }
    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(t.date,1,7)=?");
        params_vec.push(month.into());
    }
    if let Some(kind) = sub.get_one::<String>("kind") {
        sql.push_str(" AND t.kind=?");
        params_vec.push(kind.into());
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND t.category=?");
        params_vec.push(cat.into());
    }
    sql.push_str(" ORDER BY t.date DESC, t.id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let user: Option<String> = r.get(2)?;
        let kind: String = r.get(3)?;
        let amount: String = r.get(4)?;
        let category: String = r.get(5)?;
        let note: Option<String> = r.get(6)?;
        data.push(TransactionRow {
            id,
            date,
            user: user.unwrap_or_default(),
            kind,
            amount,
            category,
            note: note.unwrap_or_default(),
        });
    }
    Ok(data)
}
