// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{pretty_table, MAX_CATEGORY_LEN};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Amounts that are not positive magnitudes (legacy signed rows or
    //    imports that bypassed the create-side check)
    let mut stmt = conn.prepare("SELECT id, amount FROM transactions")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let amount_s: String = r.get(1)?;
        match amount_s.parse::<Decimal>() {
            Ok(amount) if amount > Decimal::ZERO => {}
            Ok(amount) => rows.push(vec![
                "non_positive_amount".into(),
                format!("tx {} = {}", id, amount),
            ]),
            Err(_) => rows.push(vec![
                "unparseable_amount".into(),
                format!("tx {} = '{}'", id, amount_s),
            ]),
        }
    }

    // 2) Categories over the length limit
    let mut stmt2 = conn.prepare("SELECT id, category FROM transactions WHERE length(category) > ?1")?;
    let mut cur2 = stmt2.query([MAX_CATEGORY_LEN as i64])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        let cat: String = r.get(1)?;
        rows.push(vec!["category_too_long".into(), format!("tx {} '{}'", id, cat)]);
    }

    // 3) Transactions referencing a missing user
    let mut stmt3 = conn.prepare(
        "SELECT t.id, t.user_id FROM transactions t LEFT JOIN users u ON t.user_id=u.id WHERE u.id IS NULL",
    )?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        let user_id: i64 = r.get(1)?;
        rows.push(vec![
            "missing_user".into(),
            format!("tx {} -> user {}", id, user_id),
        ]);
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
