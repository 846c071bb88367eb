// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{AppData, NewTransaction, TxKind};
use crate::store::Store;
use crate::utils::{
    fmt_money, maybe_print_json, now_rfc3339, parse_amount, parse_datetime, parse_month,
    parse_tx_kind, pretty_table, try_datetime, tx_kind_label,
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
    let kind = parse_tx_kind(sub.get_one::<String>("kind").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    if category.is_empty() {
        anyhow::bail!("Category must not be empty");
    }
    let description = sub.get_one::<String>("desc").cloned().unwrap_or_default();
    let date = record_date(sub)?;

    let id = store.add_transaction(NewTransaction {
        r#type: kind,
        amount,
        category: category.clone(),
        description,
        date: date.clone(),
    })?;
    println!(
        "Recorded {} {} in '{}' on {} ({})",
        tx_kind_label(kind),
        fmt_money(&amount),
        category,
        date,
        id
    );
    Ok(())
}

pub fn record_date(sub: &clap::ArgMatches) -> Result<String> {
    match sub.get_one::<String>("date") {
        Some(s) => Ok(parse_datetime(s)?.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
        None => Ok(now_rfc3339()),
    }
}

fn list(data: &AppData, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let rows = query_rows(data, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Kind", "Amount", "Category", "Description"],
                cells,
            )
        );
    }
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if store.delete_transaction(id)? {
        println!("Deleted transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

/// Month/kind-filtered transactions as display rows, newest first.
/// Records with unparsable dates sort last.
pub fn query_rows(data: &AppData, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };
    let kind: Option<TxKind> = match sub.get_one::<String>("kind") {
        Some(k) => Some(parse_tx_kind(k)?),
        None => None,
    };

    let mut picked: Vec<_> = match month.as_deref() {
        Some(m) => crate::aggregate::monthly_transactions(data, m),
        None => data.transactions.iter().collect(),
    };
    if let Some(k) = kind {
        picked.retain(|t| t.r#type == k);
    }
    picked.sort_by(|a, b| try_datetime(&b.date).cmp(&try_datetime(&a.date)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        picked.truncate(*limit);
    }

    Ok(picked
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.clone(),
            kind: tx_kind_label(t.r#type).to_string(),
            amount: fmt_money(&t.amount),
            category: t.category.clone(),
            description: t.description.clone(),
        })
        .collect())
}
