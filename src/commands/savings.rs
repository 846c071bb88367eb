// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::savings_balance;
use crate::commands::transactions::record_date;
use crate::models::{AppData, NewSaving};
use crate::store::Store;
use crate::utils::{
    fmt_money, maybe_print_json, parse_amount, parse_saving_kind, pretty_table, saving_kind_label,
    try_datetime,
};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub),
        Some(("list", sub)) => list(store.data(), sub),
        Some(("rm", sub)) => rm(store, sub),
        _ => Ok(()),
    }
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let kind = parse_saving_kind(sub.get_one::<String>("kind").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("desc").cloned().unwrap_or_default();
    let date = record_date(sub)?;

    let id = store.add_saving(NewSaving {
        r#type: kind,
        amount,
        description,
        date: date.clone(),
    })?;
    println!(
        "Recorded savings {} {} on {} ({})",
        saving_kind_label(kind),
        fmt_money(&amount),
        date,
        id
    );
    Ok(())
}

fn list(data: &AppData, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let rows = query_rows(data);
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        println!("Total savings: {}", fmt_money(&savings_balance(data)));
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Kind", "Amount", "Description"], cells)
        );
    }
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if store.delete_saving(id)? {
        println!("Deleted savings movement {}", id);
    } else {
        println!("No savings movement with id {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct SavingRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub description: String,
}

pub fn query_rows(data: &AppData) -> Vec<SavingRow> {
    let mut picked: Vec<_> = data.savings.iter().collect();
    picked.sort_by(|a, b| try_datetime(&b.date).cmp(&try_datetime(&a.date)));
    picked
        .into_iter()
        .map(|s| SavingRow {
            id: s.id.clone(),
            date: s.date.clone(),
            kind: saving_kind_label(s.r#type).to_string(),
            amount: fmt_money(&s.amount),
            description: s.description.clone(),
        })
        .collect()
}
