// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .help("Record date (YYYY-MM-DD or RFC 3339), defaults to now")
}

fn desc_arg() -> Arg {
    Arg::new("desc").long("desc").default_value("")
}

fn amount_arg() -> Arg {
    // Let "-5" reach our own validation instead of dying in the parser
    Arg::new("amount")
        .long("amount")
        .required(true)
        .allow_negative_numbers(true)
}

pub fn build_cli() -> Command {
    Command::new("khata")
        .about("Khata: personal income, savings, and debt ledger")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the data file and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Income and expense transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("income|expense"),
                        )
                        .arg(amount_arg())
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true),
                        )
                        .arg(desc_arg())
                        .arg(date_arg()),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(Arg::new("kind").long("kind").help("income|expense"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("savings")
                .about("Savings deposits and withdrawals")
                .subcommand(
                    Command::new("add")
                        .about("Record a savings movement")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("add|subtract"),
                        )
                        .arg(amount_arg())
                        .arg(desc_arg())
                        .arg(date_arg()),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List savings movements with the running total"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a savings movement by id")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("debt")
                .about("Per-person debt records")
                .subcommand(
                    Command::new("record")
                        .about("Record a debt action")
                        .arg(
                            Arg::new("person")
                                .long("person")
                                .required(true),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("receivable|payable"),
                        )
                        .arg(
                            Arg::new("action")
                                .long("action")
                                .required(true)
                                .help("taken|repaid"),
                        )
                        .arg(amount_arg())
                        .arg(desc_arg())
                        .arg(date_arg()),
                )
                .subcommand(json_flags(
                    Command::new("history")
                        .about("A person's debt actions, newest first")
                        .arg(Arg::new("person").required(true)),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a debt action by id")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("party")
                .about("People in debt relationships")
                .subcommand(
                    Command::new("add")
                        .about("Register a person")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List parties with balances")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .help("receivable|payable"),
                        ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Derived figures")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Monthly income/expense plus global balances")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, defaults to the current month")),
                ))
                .subcommand(json_flags(
                    Command::new("history").about("Monthly income/expense buckets, newest first"),
                )),
        )
        .subcommand(
            Command::new("profile")
                .about("Owner profile")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set")
                        .about("Update profile fields")
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("email").long("email"))
                        .arg(Arg::new("avatar").long("avatar")),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("Application settings")
                .subcommand(
                    Command::new("language")
                        .about("Set the UI language")
                        .arg(Arg::new("value").required(true).help("bn|en")),
                )
                .subcommand(
                    Command::new("theme")
                        .about("Set the theme")
                        .arg(Arg::new("value").required(true).help("light|dark")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write a backup file")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .default_value("all")
                        .help("all|transactions|savings|debts"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output file or directory (defaults to finance_<kind>_<stamp>.json in the current directory)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("json")
                        .help("json|csv (csv for transactions only)"),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Restore a full or selective backup")
                .arg(Arg::new("path").required(true)),
        )
        .subcommand(Command::new("doctor").about("Check the ledger for data issues"))
}
