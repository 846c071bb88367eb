// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{Restored, Store, StoreError};
use crate::utils::{export_file_name, tx_kind_label};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn export(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let kind = sub.get_one::<String>("kind").unwrap().to_lowercase();
    let format = sub.get_one::<String>("format").unwrap().to_lowercase();

    let path = match format.as_str() {
        "json" => {
            let content = store.export_json(&kind)?;
            let path = out_path(sub, &kind, "json");
            std::fs::write(&path, content)
                .with_context(|| format!("Write backup {}", path.display()))?;
            path
        }
        "csv" => {
            if kind != "transactions" {
                anyhow::bail!("CSV export covers transactions only (got kind '{}')", kind);
            }
            let path = out_path(sub, &kind, "csv");
            write_transactions_csv(store, &path)?;
            path
        }
        _ => anyhow::bail!("Unknown format: {} (use csv|json)", format),
    };
    println!("Exported {} to {}", kind, path.display());
    Ok(())
}

fn out_path(sub: &clap::ArgMatches, kind: &str, ext: &str) -> PathBuf {
    match sub.get_one::<String>("out") {
        Some(out) => {
            let p = PathBuf::from(out);
            if p.is_dir() {
                p.join(export_file_name(kind, ext))
            } else {
                p
            }
        }
        None => PathBuf::from(export_file_name(kind, ext)),
    }
}

fn write_transactions_csv(store: &Store, path: &std::path::Path) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("Open CSV {}", path.display()))?;
    wtr.write_record(["id", "date", "type", "amount", "category", "description"])?;
    for t in &store.data().transactions {
        wtr.write_record([
            t.id.as_str(),
            t.date.as_str(),
            tx_kind_label(t.r#type),
            &t.amount.to_string(),
            t.category.as_str(),
            t.description.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Restore a backup file. A blob carrying both profile and settings replaces
/// the whole snapshot; a bare record list is classified and prepended. The
/// store is untouched unless one of those shapes fully decodes.
pub fn import(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap();
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("Read backup file {}", path))?;

    match store.restore_full(&raw) {
        Ok(()) => {
            println!("Restored full backup from {}", path);
            Ok(())
        }
        Err(e) if is_shape_mismatch(&e) => {
            match store.restore_partial(&raw)? {
                Restored::Nothing => println!("Backup list is empty; nothing to restore"),
                Restored::Transactions(n) => println!("Restored {} transactions", n),
                Restored::Savings(n) => println!("Restored {} savings movements", n),
                Restored::Debts(n) => println!("Restored {} debt actions", n),
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn is_shape_mismatch(e: &anyhow::Error) -> bool {
    matches!(e.downcast_ref::<StoreError>(), Some(StoreError::ShapeMismatch))
}
