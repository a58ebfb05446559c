// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn with_json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

fn user_arg() -> Arg {
    Arg::new("user")
        .long("user")
        .required(true)
        .help("User name the report is scoped to")
}

fn period_arg() -> Arg {
    Arg::new("period")
        .long("period")
        .help("Report window: 1month|3months|6months|1year")
}

fn as_of_arg() -> Arg {
    Arg::new("as-of")
        .long("as-of")
        .help("Reference date (YYYY-MM-DD, defaults to today)")
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .version(crate_version!())
        .about("Personal finance tracking, reports, and analytics")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("user")
                .about("Manage users")
                .subcommand(
                    Command::new("add").about("Add a user").arg(
                        Arg::new("name")
                            .required(true)
                            .help("Unique user name"),
                    ),
                )
                .subcommand(with_json_flags(
                    Command::new("list").about("List users"),
                )),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive magnitude; direction comes from --kind"),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("income|expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Free-text category (max 50 chars)"),
                        )
                        .arg(user_arg())
                        .arg(Arg::new("note").long("note").help("Optional note")),
                )
                .subcommand(with_json_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(Arg::new("user").long("user").help("Filter by user name"))
                        .arg(Arg::new("month").long("month").help("Filter by month (YYYY-MM)"))
                        .arg(Arg::new("kind").long("kind").help("Filter by kind (income|expense)"))
                        .arg(Arg::new("category").long("category").help("Filter by category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Maximum rows"),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64))
                            .help("Transaction id"),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Analytics reports")
                .subcommand(with_json_flags(
                    Command::new("analytics")
                        .about("Full report: summary, monthly and category breakdowns")
                        .arg(user_arg())
                        .arg(period_arg())
                        .arg(as_of_arg()),
                ))
                .subcommand(with_json_flags(
                    Command::new("monthly")
                        .about("Single-month breakdown by category")
                        .arg(user_arg())
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .required(true)
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .required(true)
                                .value_parser(value_parser!(u32))
                                .help("1-12"),
                        ),
                ))
                .subcommand(with_json_flags(
                    Command::new("categories")
                        .about("Per-category activity over a period")
                        .arg(user_arg())
                        .arg(period_arg())
                        .arg(as_of_arg()),
                ))
                .subcommand(with_json_flags(
                    Command::new("stats")
                        .about("Current-month dashboard figures")
                        .arg(user_arg())
                        .arg(as_of_arg()),
                )),
        )
        .subcommand(
            Command::new("admin").about("Cross-user aggregates").subcommand(
                with_json_flags(
                    Command::new("overview")
                        .about("Global totals, top categories, monthly trend")
                        .arg(as_of_arg()),
                ),
            ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export all transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .required(true)
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true).help("Output file")),
            ),
        )
        .subcommand(Command::new("doctor").about("Check the store for inconsistent data"))
}
