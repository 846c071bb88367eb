// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    AppData, Debt, NewDebt, NewSaving, NewTransaction, Profile, Saving, Settings, Transaction,
};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Khata", "khata"));

/// Store failure taxonomy. Anything not covered here is an I/O error and
/// travels as plain `anyhow` context.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backup is not valid JSON: {0}")]
    ParseFailure(#[from] serde_json::Error),
    #[error("backup shape not recognized as a full export or any record list")]
    ShapeMismatch,
    #[error("party '{0}' already exists")]
    DuplicateParty(String),
}

/// What a selective restore classified and applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restored {
    Nothing,
    Transactions(usize),
    Savings(usize),
    Debts(usize),
}

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("khata.json"))
}

/// The canonical snapshot and its home on disk. Every mutation builds the
/// next snapshot from a clone, writes it out in full, and only then swaps
/// it in; a failed write leaves the in-memory snapshot untouched.
pub struct Store {
    path: PathBuf,
    data: AppData,
}

impl Store {
    pub fn open_default() -> Result<Self> {
        Self::open_at(store_path()?)
    }

    pub fn open_at(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Read store at {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Corrupt store file at {}", path.display()))?
        } else {
            AppData::default()
        };
        Ok(Store { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    /// Write the current snapshot out unchanged (used by `init` to create
    /// the data file before any mutation has happened).
    pub fn save(&mut self) -> Result<()> {
        let current = self.data.clone();
        self.commit(current)
    }

    fn commit(&mut self, next: AppData) -> Result<()> {
        let blob = serde_json::to_string_pretty(&next)?;
        fs::write(&self.path, blob)
            .with_context(|| format!("Write store at {}", self.path.display()))?;
        self.data = next;
        Ok(())
    }

    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let mut next = self.data.clone();
        next.transactions.insert(
            0,
            Transaction {
                id: id.clone(),
                r#type: new.r#type,
                amount: new.amount,
                category: new.category,
                description: new.description,
                date: new.date,
            },
        );
        self.commit(next)?;
        Ok(id)
    }

    pub fn add_saving(&mut self, new: NewSaving) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let mut next = self.data.clone();
        next.savings.insert(
            0,
            Saving {
                id: id.clone(),
                amount: new.amount,
                r#type: new.r#type,
                description: new.description,
                date: new.date,
            },
        );
        self.commit(next)?;
        Ok(id)
    }

    /// Adding a debt action for an unknown person registers the party.
    pub fn add_debt(&mut self, new: NewDebt) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let mut next = self.data.clone();
        next.debts.insert(
            0,
            Debt {
                id: id.clone(),
                r#type: new.r#type,
                person_name: new.person_name,
                amount: new.amount,
                description: new.description,
                date: new.date,
                action_type: new.action_type,
            },
        );
        ensure_parties(&mut next);
        self.commit(next)?;
        Ok(id)
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<bool> {
        let mut next = self.data.clone();
        next.transactions.retain(|t| t.id != id);
        self.commit_if_shrunk(next, |d| d.transactions.len())
    }

    pub fn delete_saving(&mut self, id: &str) -> Result<bool> {
        let mut next = self.data.clone();
        next.savings.retain(|s| s.id != id);
        self.commit_if_shrunk(next, |d| d.savings.len())
    }

    pub fn delete_debt(&mut self, id: &str) -> Result<bool> {
        let mut next = self.data.clone();
        next.debts.retain(|d| d.id != id);
        self.commit_if_shrunk(next, |d| d.debts.len())
    }

    // Deleting an absent id is an idempotent no-op, not an error.
    fn commit_if_shrunk(&mut self, next: AppData, len: fn(&AppData) -> usize) -> Result<bool> {
        if len(&next) == len(&self.data) {
            return Ok(false);
        }
        self.commit(next)?;
        Ok(true)
    }

    pub fn add_party(&mut self, name: &str) -> Result<()> {
        if self.data.parties.iter().any(|p| p == name) {
            return Err(StoreError::DuplicateParty(name.to_string()).into());
        }
        let mut next = self.data.clone();
        next.parties.push(name.to_string());
        self.commit(next)
    }

    pub fn update_profile(&mut self, profile: Profile) -> Result<()> {
        let mut next = self.data.clone();
        next.profile = profile;
        self.commit(next)
    }

    pub fn update_settings(&mut self, settings: Settings) -> Result<()> {
        let mut next = self.data.clone();
        next.settings = settings;
        self.commit(next)
    }

    /// Pretty JSON of the full snapshot (`all`) or one bare collection.
    pub fn export_json(&self, kind: &str) -> Result<String> {
        let out = match kind {
            "all" => serde_json::to_string_pretty(&self.data)?,
            "transactions" => serde_json::to_string_pretty(&self.data.transactions)?,
            "savings" => serde_json::to_string_pretty(&self.data.savings)?,
            "debts" => serde_json::to_string_pretty(&self.data.debts)?,
            _ => anyhow::bail!("Unknown export kind '{}' (use all|transactions|savings|debts)", kind),
        };
        Ok(out)
    }

    /// Replace the whole snapshot from a full backup. The blob must be an
    /// object carrying both `profile` and `settings`; anything else is a
    /// shape mismatch and the store stays as it was.
    pub fn restore_full(&mut self, raw: &str) -> Result<()> {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(StoreError::ParseFailure)?;
        let looks_full = value
            .as_object()
            .is_some_and(|o| o.contains_key("profile") && o.contains_key("settings"));
        if !looks_full {
            return Err(StoreError::ShapeMismatch.into());
        }
        let mut next: AppData = serde_json::from_value(value).map_err(StoreError::ParseFailure)?;
        ensure_parties(&mut next);
        self.commit(next)
    }

    /// Restore a selective backup: a bare JSON list of one record kind.
    /// Classification is a tagged decode tried in fixed order (debts,
    /// transactions, savings) — the kind enums make the three decodes
    /// mutually exclusive. Items are prepended, never replacing existing
    /// data. An empty list cannot be classified and is a no-op.
    pub fn restore_partial(&mut self, raw: &str) -> Result<Restored> {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(StoreError::ParseFailure)?;
        let Some(list) = value.as_array() else {
            return Err(StoreError::ShapeMismatch.into());
        };
        if list.is_empty() {
            return Ok(Restored::Nothing);
        }

        if let Ok(debts) = serde_json::from_value::<Vec<Debt>>(value.clone()) {
            let n = debts.len();
            let mut next = self.data.clone();
            next.debts.splice(0..0, debts);
            ensure_parties(&mut next);
            self.commit(next)?;
            return Ok(Restored::Debts(n));
        }
        if let Ok(txs) = serde_json::from_value::<Vec<Transaction>>(value.clone()) {
            let n = txs.len();
            let mut next = self.data.clone();
            next.transactions.splice(0..0, txs);
            self.commit(next)?;
            return Ok(Restored::Transactions(n));
        }
        if let Ok(savings) = serde_json::from_value::<Vec<Saving>>(value) {
            let n = savings.len();
            let mut next = self.data.clone();
            next.savings.splice(0..0, savings);
            self.commit(next)?;
            return Ok(Restored::Savings(n));
        }
        Err(StoreError::ShapeMismatch.into())
    }
}

// `parties` must stay a superset of every person named in `debts`.
fn ensure_parties(data: &mut AppData) {
    let names: Vec<String> = data
        .debts
        .iter()
        .map(|d| d.person_name.clone())
        .filter(|n| !data.parties.iter().any(|p| p == n))
        .collect();
    for name in names {
        if !data.parties.contains(&name) {
            data.parties.push(name);
        }
    }
}
