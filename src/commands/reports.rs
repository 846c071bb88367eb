// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{
    cash_balance, monthly_history, monthly_sums, monthly_transactions, party_balances,
    savings_balance, totals_by_direction,
};
use crate::models::AppData;
use crate::utils::{current_month, fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(data: &AppData, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(data, sub)?,
        Some(("history", sub)) => history(data, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct Summary {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub cash_balance: Decimal,
    pub savings: Decimal,
    pub receivable: Decimal,
    pub payable: Decimal,
}

/// Monthly income/expense next to the global figures: income and expense
/// are scoped to the month, the balances cover the whole log.
pub fn build_summary(data: &AppData, month: &str) -> Summary {
    let filtered = monthly_transactions(data, month);
    let sums = monthly_sums(&filtered);
    let directions = totals_by_direction(&party_balances(data));
    Summary {
        month: month.to_string(),
        income: sums.income,
        expense: sums.expense,
        cash_balance: cash_balance(data),
        savings: savings_balance(data),
        receivable: directions.receivable,
        payable: directions.payable,
    }
}

fn summary(data: &AppData, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => current_month(),
    };
    let s = build_summary(data, &month);
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![
            vec![format!("Income ({})", s.month), fmt_money(&s.income)],
            vec![format!("Expense ({})", s.month), fmt_money(&s.expense)],
            vec!["Cash balance".into(), fmt_money(&s.cash_balance)],
            vec!["Total savings".into(), fmt_money(&s.savings)],
            vec!["Receivable".into(), fmt_money(&s.receivable)],
            vec!["Payable".into(), fmt_money(&s.payable)],
        ];
        println!("{}", pretty_table(&["Figure", "Amount"], rows));
    }
    Ok(())
}

fn history(data: &AppData, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let buckets = monthly_history(data);
    if !maybe_print_json(json_flag, jsonl_flag, &buckets)? {
        let rows: Vec<Vec<String>> = buckets
            .iter()
            .map(|b| {
                vec![
                    b.month.format("%B %Y").to_string(),
                    fmt_money(&b.income),
                    fmt_money(&b.expense),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    }
    Ok(())
}
