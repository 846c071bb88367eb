// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use khata::models::{AppData, Debt, DebtActionKind, DebtKind, Transaction, TxKind};
use khata::store::Store;
use khata::{cli, commands};
use rust_decimal::Decimal;
use tempfile::{tempdir, TempDir};

fn tx(id: &str, kind: TxKind, amount: i64, date: &str) -> Transaction {
    Transaction {
        id: id.into(),
        r#type: kind,
        amount: Decimal::new(amount, 0),
        category: "General".into(),
        description: String::new(),
        date: date.into(),
    }
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["khata", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            return list_m.clone();
        }
        panic!("no list subcommand");
    }
    panic!("no tx subcommand");
}

#[test]
fn list_limit_respected_and_sorted_newest_first() {
    let data = AppData {
        transactions: vec![
            tx("t1", TxKind::Expense, 10, "2025-01-01T08:00:00Z"),
            tx("t2", TxKind::Expense, 10, "2025-01-02T08:00:00Z"),
            tx("t3", TxKind::Expense, 10, "2025-01-03T08:00:00Z"),
        ],
        ..Default::default()
    };
    let rows = commands::transactions::query_rows(&data, &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-03T08:00:00Z");
    assert_eq!(rows[1].date, "2025-01-02T08:00:00Z");
}

#[test]
fn list_month_and_kind_filters() {
    let data = AppData {
        transactions: vec![
            tx("t1", TxKind::Income, 1000, "2025-01-05T08:00:00Z"),
            tx("t2", TxKind::Expense, 300, "2025-01-10T08:00:00Z"),
            tx("t3", TxKind::Expense, 50, "2025-02-01T08:00:00Z"),
        ],
        ..Default::default()
    };
    let rows =
        commands::transactions::query_rows(&data, &list_matches(&["--month", "2025-01"])).unwrap();
    assert_eq!(rows.len(), 2);

    let rows = commands::transactions::query_rows(
        &data,
        &list_matches(&["--month", "2025-01", "--kind", "expense"]),
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "t2");

    assert!(
        commands::transactions::query_rows(&data, &list_matches(&["--month", "2025-13"])).is_err()
    );
}

#[test]
fn add_rejects_negative_amount_and_blank_category() {
    let dir = tempdir().unwrap();
    let mut store = Store::open_at(dir.path().join("khata.json")).unwrap();

    let matches = cli::build_cli().get_matches_from([
        "khata", "tx", "add", "--kind", "income", "--amount", "-5", "--category", "Pay",
    ]);
    if let Some(("tx", sub)) = matches.subcommand() {
        assert!(commands::transactions::handle(&mut store, sub).is_err());
    } else {
        panic!("no tx subcommand");
    }

    let matches = cli::build_cli().get_matches_from([
        "khata", "tx", "add", "--kind", "income", "--amount", "5", "--category", "  ",
    ]);
    if let Some(("tx", sub)) = matches.subcommand() {
        assert!(commands::transactions::handle(&mut store, sub).is_err());
    } else {
        panic!("no tx subcommand");
    }
    assert!(store.data().transactions.is_empty());
}

fn party_setup() -> (TempDir, Store) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("khata.json");
    let mut store = Store::open_at(path).unwrap();
    // Registered but inactive party plus two classified ones
    store.add_party("Quiet").unwrap();
    store
        .restore_partial(
            &serde_json::to_string(&vec![
                Debt {
                    id: "d1".into(),
                    r#type: DebtKind::Receivable,
                    person_name: "Alice".into(),
                    amount: Decimal::new(500, 0),
                    description: String::new(),
                    date: "2024-01-01T00:00:00Z".into(),
                    action_type: DebtActionKind::Taken,
                },
                Debt {
                    id: "d2".into(),
                    r#type: DebtKind::Payable,
                    person_name: "Karim".into(),
                    amount: Decimal::new(200, 0),
                    description: String::new(),
                    date: "2024-01-02T00:00:00Z".into(),
                    action_type: DebtActionKind::Taken,
                },
            ])
            .unwrap(),
        )
        .unwrap();
    (dir, store)
}

#[test]
fn party_list_shows_balances_and_filters_by_kind() {
    let (_dir, store) = party_setup();

    let matches = cli::build_cli().get_matches_from(["khata", "party", "list"]);
    let sub = match matches.subcommand() {
        Some(("party", p)) => match p.subcommand() {
            Some(("list", l)) => l.clone(),
            _ => panic!("no list subcommand"),
        },
        _ => panic!("no party subcommand"),
    };
    let rows = commands::parties::query_rows(store.data(), &sub).unwrap();
    assert_eq!(rows.len(), 3);
    let quiet = rows.iter().find(|r| r.name == "Quiet").unwrap();
    assert_eq!(quiet.kind, "-");
    assert_eq!(quiet.total, "0");

    let matches =
        cli::build_cli().get_matches_from(["khata", "party", "list", "--kind", "receivable"]);
    let sub = match matches.subcommand() {
        Some(("party", p)) => match p.subcommand() {
            Some(("list", l)) => l.clone(),
            _ => panic!("no list subcommand"),
        },
        _ => panic!("no party subcommand"),
    };
    let rows = commands::parties::query_rows(store.data(), &sub).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].total, "500");
}

#[test]
fn summary_reports_monthly_and_global_figures() {
    let (_dir, mut store) = party_setup();
    store
        .restore_partial(
            &serde_json::to_string(&vec![
                tx("t1", TxKind::Income, 1000, "2024-01-05T09:00:00Z"),
                tx("t2", TxKind::Expense, 300, "2024-01-10T09:00:00Z"),
                tx("t3", TxKind::Income, 80, "2024-02-01T09:00:00Z"),
            ])
            .unwrap(),
        )
        .unwrap();

    let s = commands::reports::build_summary(store.data(), "2024-01");
    assert_eq!(s.income, Decimal::new(1000, 0));
    assert_eq!(s.expense, Decimal::new(300, 0));
    // Cash balance spans the whole log, not just January
    assert_eq!(s.cash_balance, Decimal::new(780, 0));
    assert_eq!(s.receivable, Decimal::new(500, 0));
    assert_eq!(s.payable, Decimal::new(200, 0));
}

#[test]
fn debt_history_is_scoped_to_the_person_newest_first() {
    let (_dir, store) = party_setup();
    let rows = commands::debts::history_rows(store.data(), "Alice");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "d1");
    assert_eq!(rows[0].kind, "RECEIVABLE");
    assert_eq!(rows[0].action, "TAKEN");
    assert!(commands::debts::history_rows(store.data(), "Nobody").is_empty());
}
