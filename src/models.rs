// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub r#type: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: String, // RFC 3339
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SavingKind {
    Add,
    Subtract,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saving {
    pub id: String,
    pub amount: Decimal,
    pub r#type: SavingKind,
    pub description: String,
    pub date: String, // RFC 3339
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtKind {
    Receivable,
    Payable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtActionKind {
    Taken,
    Repaid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    pub r#type: DebtKind,
    #[serde(rename = "personName")]
    pub person_name: String,
    pub amount: Decimal,
    pub description: String,
    pub date: String, // RFC 3339
    #[serde(rename = "actionType")]
    pub action_type: DebtActionKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: "User00001".into(),
            email: "mail@example.com".into(),
            avatar: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Bn,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub language: Language,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            language: Language::Bn,
            theme: Theme::Light,
        }
    }
}

/// The full persisted snapshot. Collections are newest-first by insertion;
/// chronological order is always derived from `date`, never from position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub savings: Vec<Saving>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub parties: Vec<String>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub r#type: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct NewSaving {
    pub r#type: SavingKind,
    pub amount: Decimal,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct NewDebt {
    pub r#type: DebtKind,
    pub person_name: String,
    pub amount: Decimal,
    pub description: String,
    pub date: String,
    pub action_type: DebtActionKind,
}
