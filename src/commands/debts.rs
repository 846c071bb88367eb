// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::record_date;
use crate::models::{AppData, NewDebt};
use crate::store::Store;
use crate::utils::{
    action_kind_label, debt_kind_label, fmt_money, maybe_print_json, parse_action_kind,
    parse_amount, parse_debt_kind, pretty_table, try_datetime,
};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("record", sub)) => record(store, sub),
        Some(("history", sub)) => history(store.data(), sub),
        Some(("rm", sub)) => rm(store, sub),
        _ => Ok(()),
    }
}

fn record(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let person = sub.get_one::<String>("person").unwrap().trim().to_string();
    if person.is_empty() {
        anyhow::bail!("Person name must not be empty");
    }
    let kind = parse_debt_kind(sub.get_one::<String>("kind").unwrap())?;
    let action = parse_action_kind(sub.get_one::<String>("action").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("desc").cloned().unwrap_or_default();
    let date = record_date(sub)?;

    let id = store.add_debt(NewDebt {
        r#type: kind,
        person_name: person.clone(),
        amount,
        description,
        date,
        action_type: action,
    })?;
    println!(
        "Recorded {} {} {} for '{}' ({})",
        debt_kind_label(kind),
        action_kind_label(action),
        fmt_money(&amount),
        person,
        id
    );
    Ok(())
}

fn history(data: &AppData, sub: &clap::ArgMatches) -> Result<()> {
    let person = sub.get_one::<String>("person").unwrap();
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let rows = history_rows(data, person);
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.action.clone(),
                    r.amount.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Kind", "Action", "Amount", "Description"],
                cells,
            )
        );
    }
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if store.delete_debt(id)? {
        println!("Deleted debt action {}", id);
    } else {
        println!("No debt action with id {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct DebtRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub action: String,
    pub amount: String,
    pub description: String,
}

pub fn history_rows(data: &AppData, person: &str) -> Vec<DebtRow> {
    let mut picked: Vec<_> = data
        .debts
        .iter()
        .filter(|d| d.person_name == person)
        .collect();
    picked.sort_by(|a, b| try_datetime(&b.date).cmp(&try_datetime(&a.date)));
    picked
        .into_iter()
        .map(|d| DebtRow {
            id: d.id.clone(),
            date: d.date.clone(),
            kind: debt_kind_label(d.r#type).to_string(),
            action: action_kind_label(d.action_type).to_string(),
            amount: fmt_money(&d.amount),
            description: d.description.clone(),
        })
        .collect()
}
