// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::{params, Connection};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            conn.execute("INSERT INTO users(name) VALUES (?1)", params![name])?;
            println!("Added user '{}'", name);
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let users = db::all_users(conn)?;
            if !maybe_print_json(json_flag, jsonl_flag, &users)? {
                let rows = users
                    .iter()
                    .map(|u| {
                        vec![
                            u.id.to_string(),
                            u.name.clone(),
                            u.created_at.to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Name", "Created"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
