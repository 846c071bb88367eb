// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{AppData, DebtActionKind, DebtKind, SavingKind, Transaction, TxKind};
use crate::utils::{month_key, try_datetime};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthlySums {
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartyBalance {
    pub total: Decimal,
    pub kind: DebtKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DirectionTotals {
    pub receivable: Decimal,
    pub payable: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthBucket {
    pub month: NaiveDate, // first of month
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub code: &'static str,
    pub detail: String,
}

/// Transactions whose date falls in `month` (YYYY-MM), in collection order.
/// Records with unparsable dates are excluded here and reported by
/// [`integrity_report`].
pub fn monthly_transactions<'a>(data: &'a AppData, month: &str) -> Vec<&'a Transaction> {
    data.transactions
        .iter()
        .filter(|t| {
            try_datetime(&t.date)
                .map(|dt| month_key(&dt) == month)
                .unwrap_or(false)
        })
        .collect()
}

pub fn monthly_sums(filtered: &[&Transaction]) -> MonthlySums {
    let mut sums = MonthlySums::default();
    for t in filtered {
        match t.r#type {
            TxKind::Income => sums.income += t.amount,
            TxKind::Expense => sums.expense += t.amount,
        }
    }
    sums
}

/// Running balance over the whole log, independent of the displayed month.
pub fn cash_balance(data: &AppData) -> Decimal {
    data.transactions
        .iter()
        .fold(Decimal::ZERO, |acc, t| match t.r#type {
            TxKind::Income => acc + t.amount,
            TxKind::Expense => acc - t.amount,
        })
}

pub fn savings_balance(data: &AppData) -> Decimal {
    data.savings
        .iter()
        .fold(Decimal::ZERO, |acc, s| match s.r#type {
            SavingKind::Add => acc + s.amount,
            SavingKind::Subtract => acc - s.amount,
        })
}

/// Per-party running totals. TAKEN raises the outstanding amount, REPAID
/// lowers it. A party's direction is the kind on its action with the latest
/// parseable date (later record wins a tie); a group with no parseable date
/// at all falls back to the last record in collection order.
pub fn party_balances(data: &AppData) -> BTreeMap<String, PartyBalance> {
    struct Acc {
        total: Decimal,
        kind: DebtKind,
        latest: Option<chrono::DateTime<chrono::Utc>>,
    }
    let mut groups: BTreeMap<String, Acc> = BTreeMap::new();

    for d in &data.debts {
        let entry = groups.entry(d.person_name.clone()).or_insert(Acc {
            total: Decimal::ZERO,
            kind: d.r#type,
            latest: None,
        });
        match d.action_type {
            DebtActionKind::Taken => entry.total += d.amount,
            DebtActionKind::Repaid => entry.total -= d.amount,
        }
        match try_datetime(&d.date) {
            Some(dt) => {
                if entry.latest.is_none_or(|best| dt >= best) {
                    entry.kind = d.r#type;
                    entry.latest = Some(dt);
                }
            }
            None => {
                if entry.latest.is_none() {
                    entry.kind = d.r#type;
                }
            }
        }
    }

    groups
        .into_iter()
        .map(|(name, acc)| {
            (
                name,
                PartyBalance {
                    total: acc.total,
                    kind: acc.kind,
                },
            )
        })
        .collect()
}

/// Sums across parties by direction. Totals are not clamped: a receivable
/// party driven negative by repayments contributes its negative total.
pub fn totals_by_direction(balances: &BTreeMap<String, PartyBalance>) -> DirectionTotals {
    let mut totals = DirectionTotals::default();
    for b in balances.values() {
        match b.kind {
            DebtKind::Receivable => totals.receivable += b.total,
            DebtKind::Payable => totals.payable += b.total,
        }
    }
    totals
}

/// All transactions bucketed by calendar month, newest month first. Months
/// with no activity produce no bucket.
pub fn monthly_history(data: &AppData) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<(i32, u32), MonthlySums> = BTreeMap::new();
    for t in &data.transactions {
        let Some(dt) = try_datetime(&t.date) else {
            continue;
        };
        let entry = buckets.entry((dt.year(), dt.month())).or_default();
        match t.r#type {
            TxKind::Income => entry.income += t.amount,
            TxKind::Expense => entry.expense += t.amount,
        }
    }
    buckets
        .into_iter()
        .rev()
        .filter_map(|((y, m), sums)| {
            NaiveDate::from_ymd_opt(y, m, 1).map(|month| MonthBucket {
                month,
                income: sums.income,
                expense: sums.expense,
            })
        })
        .collect()
}

/// Data-integrity findings: records whose date cannot be parsed (and are
/// therefore excluded from date-bucketed views) and parties whose debt
/// actions mix RECEIVABLE and PAYABLE kinds.
pub fn integrity_report(data: &AppData) -> Vec<Issue> {
    let mut issues = Vec::new();

    for t in &data.transactions {
        if try_datetime(&t.date).is_none() {
            issues.push(Issue {
                code: "unparsable_date",
                detail: format!("transaction {} '{}'", t.id, t.date),
            });
        }
    }
    for s in &data.savings {
        if try_datetime(&s.date).is_none() {
            issues.push(Issue {
                code: "unparsable_date",
                detail: format!("saving {} '{}'", s.id, s.date),
            });
        }
    }
    for d in &data.debts {
        if try_datetime(&d.date).is_none() {
            issues.push(Issue {
                code: "unparsable_date",
                detail: format!("debt {} '{}'", d.id, d.date),
            });
        }
    }

    let mut kinds: BTreeMap<&str, DebtKind> = BTreeMap::new();
    let mut flagged: Vec<&str> = Vec::new();
    for d in &data.debts {
        let first_seen = kinds.entry(d.person_name.as_str()).or_insert(d.r#type);
        if *first_seen != d.r#type && !flagged.contains(&d.person_name.as_str()) {
            flagged.push(d.person_name.as_str());
        }
    }
    for name in flagged {
        issues.push(Issue {
            code: "mixed_debt_kinds",
            detail: name.to_string(),
        });
    }

    issues
}
