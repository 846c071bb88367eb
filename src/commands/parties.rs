// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::party_balances;
use crate::models::AppData;
use crate::store::Store;
use crate::utils::{debt_kind_label, fmt_money, maybe_print_json, parse_debt_kind, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            if name.is_empty() {
                anyhow::bail!("Party name must not be empty");
            }
            store.add_party(&name)?;
            println!("Added party '{}'", name);
            Ok(())
        }
        Some(("list", sub)) => list(store.data(), sub),
        _ => Ok(()),
    }
}

fn list(data: &AppData, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let rows = query_rows(data, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|r| vec![r.name.clone(), r.kind.clone(), r.total.clone()])
            .collect();
        println!("{}", pretty_table(&["Party", "Direction", "Balance"], cells));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct PartyRow {
    pub name: String,
    pub kind: String,
    pub total: String,
}

/// Parties in registration order with their running balances. A party with
/// no debt actions yet shows a zero balance and no direction. The `--kind`
/// filter keeps only parties classified with that direction.
pub fn query_rows(data: &AppData, sub: &clap::ArgMatches) -> Result<Vec<PartyRow>> {
    let filter = match sub.get_one::<String>("kind") {
        Some(k) => Some(parse_debt_kind(k)?),
        None => None,
    };
    let balances = party_balances(data);

    Ok(data
        .parties
        .iter()
        .filter(|name| match filter {
            Some(k) => balances.get(*name).is_some_and(|b| b.kind == k),
            None => true,
        })
        .map(|name| match balances.get(name) {
            Some(b) => PartyRow {
                name: name.clone(),
                kind: debt_kind_label(b.kind).to_string(),
                total: fmt_money(&b.total),
            },
            None => PartyRow {
                name: name.clone(),
                kind: "-".to_string(),
                total: fmt_money(&rust_decimal::Decimal::ZERO),
            },
        })
        .collect())
}
