// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::models::{DebtActionKind, DebtKind, SavingKind, TxKind};

/// Lenient datetime parse for stored records. Accepts RFC 3339 as written
/// by the app itself plus the date/datetime-local shapes older backups
/// carry. Naive values are taken as UTC.
pub fn try_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Strict variant for user-entered dates.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    try_datetime(s).with_context(|| {
        format!(
            "Invalid date '{}', expected YYYY-MM-DD or an RFC 3339 timestamp",
            s
        )
    })
}

pub fn parse_month(s: &str) -> Result<String> {
    chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn month_key(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m").to_string()
}

pub fn current_month() -> String {
    Utc::now().format("%Y-%m").to_string()
}

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Record amounts are magnitudes; direction lives in the kind enums.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d.is_sign_negative() {
        anyhow::bail!("Amount '{}' must not be negative", s);
    }
    Ok(d)
}

pub fn parse_tx_kind(s: &str) -> Result<TxKind> {
    match s.to_lowercase().as_str() {
        "income" => Ok(TxKind::Income),
        "expense" => Ok(TxKind::Expense),
        _ => anyhow::bail!("Invalid kind '{}', expected income|expense", s),
    }
}

pub fn parse_saving_kind(s: &str) -> Result<SavingKind> {
    match s.to_lowercase().as_str() {
        "add" => Ok(SavingKind::Add),
        "subtract" => Ok(SavingKind::Subtract),
        _ => anyhow::bail!("Invalid kind '{}', expected add|subtract", s),
    }
}

pub fn parse_debt_kind(s: &str) -> Result<DebtKind> {
    match s.to_lowercase().as_str() {
        "receivable" => Ok(DebtKind::Receivable),
        "payable" => Ok(DebtKind::Payable),
        _ => anyhow::bail!("Invalid kind '{}', expected receivable|payable", s),
    }
}

pub fn parse_action_kind(s: &str) -> Result<DebtActionKind> {
    match s.to_lowercase().as_str() {
        "taken" => Ok(DebtActionKind::Taken),
        "repaid" => Ok(DebtActionKind::Repaid),
        _ => anyhow::bail!("Invalid action '{}', expected taken|repaid", s),
    }
}

pub fn tx_kind_label(k: TxKind) -> &'static str {
    match k {
        TxKind::Income => "INCOME",
        TxKind::Expense => "EXPENSE",
    }
}

pub fn saving_kind_label(k: SavingKind) -> &'static str {
    match k {
        SavingKind::Add => "ADD",
        SavingKind::Subtract => "SUBTRACT",
    }
}

pub fn debt_kind_label(k: DebtKind) -> &'static str {
    match k {
        DebtKind::Receivable => "RECEIVABLE",
        DebtKind::Payable => "PAYABLE",
    }
}

pub fn action_kind_label(k: DebtActionKind) -> &'static str {
    match k {
        DebtActionKind::Taken => "TAKEN",
        DebtActionKind::Repaid => "REPAID",
    }
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{}", d.round_dp(2))
}

/// `finance_<kind>_<YYYYMMDD_HHmm>.<ext>`, the backup naming convention.
pub fn export_file_name(kind: &str, ext: &str) -> String {
    format!(
        "finance_{}_{}.{}",
        kind,
        chrono::Local::now().format("%Y%m%d_%H%M"),
        ext
    )
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
