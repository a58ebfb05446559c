// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::models::{Transaction, TransactionKind, User};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Tallybook", "tallybook"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("tallybook.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

/// Public so integration tests can run the real schema against an
/// in-memory connection.
pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS users(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        created_at TEXT NOT NULL DEFAULT (date('now'))
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        amount TEXT NOT NULL,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
        category TEXT NOT NULL CHECK(length(category) <= 50),
        user_id INTEGER NOT NULL,
        note TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    CREATE INDEX IF NOT EXISTS idx_transactions_user ON transactions(user_id);
    "#,
    )?;
    Ok(())
}

/// Every transaction owned by one user, newest first.
pub fn transactions_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Transaction>> {
    load_transactions(conn, Some(user_id))
}

/// Every transaction across all users, newest first.
pub fn all_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    load_transactions(conn, None)
}

fn load_transactions(conn: &Connection, user_id: Option<i64>) -> Result<Vec<Transaction>> {
    let mut sql = String::from(
        "SELECT id, date, amount, kind, category, user_id, note FROM transactions",
    );
    if user_id.is_some() {
        sql.push_str(" WHERE user_id=?1");
    }
    sql.push_str(" ORDER BY date DESC, id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = match user_id {
        Some(id) => stmt.query([id])?,
        None => stmt.query([])?,
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let amount: String = r.get(2)?;
        let kind: String = r.get(3)?;
        let category: String = r.get(4)?;
        let owner: i64 = r.get(5)?;
        let note: Option<String> = r.get(6)?;
        data.push(Transaction {
            id,
            date: chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{}' in transactions", date))?,
            amount: amount
                .parse()
                .with_context(|| format!("Invalid amount '{}' in transactions", amount))?,
            kind: TransactionKind::from_str(&kind)?,
            category,
            user_id: owner,
            note,
        });
    }
    Ok(data)
}

pub fn all_users(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt = conn.prepare("SELECT id, name, created_at FROM users ORDER BY id")?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        let created_at: String = r.get(2)?;
        data.push(User {
            id,
            name,
            created_at: chrono::NaiveDate::parse_from_str(&created_at, "%Y-%m-%d")
                .with_context(|| format!("Invalid created_at '{}' in users", created_at))?,
        });
    }
    Ok(data)
}
