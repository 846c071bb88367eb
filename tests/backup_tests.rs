// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use khata::models::{DebtActionKind, DebtKind, NewTransaction, TxKind};
use khata::store::Store;
use khata::{cli, commands};
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::{tempdir, TempDir};

fn setup() -> (TempDir, Store) {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path().join("khata.json")).unwrap();
    (dir, store)
}

fn seed_tx(store: &mut Store) {
    store
        .add_transaction(NewTransaction {
            r#type: TxKind::Income,
            amount: Decimal::new(1000, 0),
            category: "Salary".into(),
            description: "January pay".into(),
            date: "2024-01-05T09:00:00Z".into(),
        })
        .unwrap();
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["khata", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("export", sub)) => sub.clone(),
        _ => panic!("no export subcommand"),
    }
}

fn import_matches(path: &str) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(["khata", "import", path]);
    match matches.subcommand() {
        Some(("import", sub)) => sub.clone(),
        _ => panic!("no import subcommand"),
    }
}

#[test]
fn export_all_into_dir_uses_naming_convention() {
    let (dir, mut store) = setup();
    seed_tx(&mut store);

    let out_dir = dir.path().join("backups");
    std::fs::create_dir_all(&out_dir).unwrap();
    let sub = export_matches(&["--out", out_dir.to_str().unwrap()]);
    commands::backup::export(&store, &sub).unwrap();

    let entries: Vec<String> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("finance_all_"));
    assert!(entries[0].ends_with(".json"));

    let raw = std::fs::read_to_string(out_dir.join(&entries[0])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["transactions"].as_array().unwrap().len(), 1);
    assert!(value["profile"].is_object());
    assert!(value["settings"].is_object());
}

#[test]
fn selective_export_is_a_bare_list() {
    let (dir, mut store) = setup();
    seed_tx(&mut store);

    let out = dir.path().join("tx.json");
    let sub = export_matches(&["--kind", "transactions", "--out", out.to_str().unwrap()]);
    commands::backup::export(&store, &sub).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["type"], "INCOME");
    assert_eq!(list[0]["category"], "Salary");
}

#[test]
fn csv_export_covers_transactions_only() {
    let (dir, mut store) = setup();
    seed_tx(&mut store);

    let out = dir.path().join("tx.csv");
    let sub = export_matches(&[
        "--kind",
        "transactions",
        "--format",
        "csv",
        "--out",
        out.to_str().unwrap(),
    ]);
    commands::backup::export(&store, &sub).unwrap();
    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("id,date,type,amount,category,description"));
    assert!(contents.contains("INCOME"));

    let bad = export_matches(&["--kind", "savings", "--format", "csv"]);
    assert!(commands::backup::export(&store, &bad).is_err());
}

#[test]
fn export_rejects_unknown_format() {
    let (dir, store) = setup();
    let out = dir.path().join("export.unknown");
    let sub = export_matches(&["--format", "xml", "--out", out.to_str().unwrap()]);
    assert!(commands::backup::export(&store, &sub).is_err());
    assert!(!out.exists());
}

#[test]
fn full_import_replaces_snapshot_and_registers_parties() {
    let (dir, mut store) = setup();
    seed_tx(&mut store);

    let backup = json!({
        "transactions": [],
        "savings": [],
        "debts": [{
            "id": "d1",
            "type": "PAYABLE",
            "personName": "Karim",
            "amount": 250,
            "description": "",
            "date": "2024-02-01T00:00:00Z",
            "actionType": "TAKEN"
        }],
        "parties": [],
        "profile": {"name": "Restored", "email": "restored@example.com", "avatar": ""},
        "settings": {"language": "en", "theme": "dark"}
    });
    let path = dir.path().join("full.json");
    std::fs::write(&path, serde_json::to_string_pretty(&backup).unwrap()).unwrap();

    commands::backup::import(&mut store, &import_matches(path.to_str().unwrap())).unwrap();

    assert!(store.data().transactions.is_empty());
    assert_eq!(store.data().profile.name, "Restored");
    assert_eq!(store.data().debts.len(), 1);
    // Superset invariant re-established even though the backup's party
    // list was empty
    assert_eq!(store.data().parties, vec!["Karim".to_string()]);
}

#[test]
fn selective_import_prepends_transactions() {
    let (dir, mut store) = setup();
    seed_tx(&mut store);

    let list = json!([
        {
            "id": "x1",
            "type": "EXPENSE",
            "amount": 40,
            "category": "Food",
            "description": "",
            "date": "2024-01-11T12:00:00Z"
        },
        {
            "id": "x2",
            "type": "INCOME",
            "amount": 90,
            "category": "Gift",
            "description": "",
            "date": "2024-01-12T12:00:00Z"
        }
    ]);
    let path = dir.path().join("tx_backup.json");
    std::fs::write(&path, serde_json::to_string(&list).unwrap()).unwrap();

    commands::backup::import(&mut store, &import_matches(path.to_str().unwrap())).unwrap();

    assert_eq!(store.data().transactions.len(), 3);
    assert_eq!(store.data().transactions[0].id, "x1");
    assert_eq!(store.data().transactions[1].id, "x2");
}

#[test]
fn selective_import_classifies_savings_and_debts() {
    let (dir, mut store) = setup();

    let savings = json!([{
        "id": "s1", "amount": 500, "type": "ADD",
        "description": "", "date": "2024-01-01T00:00:00Z"
    }]);
    let path = dir.path().join("savings.json");
    std::fs::write(&path, serde_json::to_string(&savings).unwrap()).unwrap();
    commands::backup::import(&mut store, &import_matches(path.to_str().unwrap())).unwrap();
    assert_eq!(store.data().savings.len(), 1);

    let debts = json!([{
        "id": "d1", "type": "RECEIVABLE", "personName": "Alice",
        "amount": 500, "description": "", "date": "2024-01-02T00:00:00Z",
        "actionType": "TAKEN"
    }]);
    let path = dir.path().join("debts.json");
    std::fs::write(&path, serde_json::to_string(&debts).unwrap()).unwrap();
    commands::backup::import(&mut store, &import_matches(path.to_str().unwrap())).unwrap();
    assert_eq!(store.data().debts.len(), 1);
    assert_eq!(store.data().debts[0].r#type, DebtKind::Receivable);
    assert_eq!(store.data().debts[0].action_type, DebtActionKind::Taken);
    assert_eq!(store.data().parties, vec!["Alice".to_string()]);
}

#[test]
fn empty_list_import_is_a_noop() {
    let (dir, mut store) = setup();
    seed_tx(&mut store);
    let before = store.data().clone();

    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();
    commands::backup::import(&mut store, &import_matches(path.to_str().unwrap())).unwrap();
    assert_eq!(store.data(), &before);
}

#[test]
fn unrecognized_shapes_are_rejected_without_mutation() {
    let (dir, mut store) = setup();
    seed_tx(&mut store);
    let before = store.data().clone();

    // A list of some other record shape
    let path = dir.path().join("junk.json");
    std::fs::write(&path, r#"[{"foo": 1}]"#).unwrap();
    assert!(commands::backup::import(&mut store, &import_matches(path.to_str().unwrap())).is_err());
    assert_eq!(store.data(), &before);

    // An object that is not a full backup (no profile/settings)
    let path2 = dir.path().join("partial_obj.json");
    std::fs::write(&path2, r#"{"transactions": []}"#).unwrap();
    assert!(
        commands::backup::import(&mut store, &import_matches(path2.to_str().unwrap())).is_err()
    );
    assert_eq!(store.data(), &before);

    // Not JSON at all
    let path3 = dir.path().join("broken.json");
    std::fs::write(&path3, "definitely not json").unwrap();
    assert!(
        commands::backup::import(&mut store, &import_matches(path3.to_str().unwrap())).is_err()
    );
    assert_eq!(store.data(), &before);
}
