// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Language, Theme};
use crate::store::Store;
use anyhow::Result;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("language", sub)) => {
            let value = sub.get_one::<String>("value").unwrap();
            let language = match value.to_lowercase().as_str() {
                "bn" => Language::Bn,
                "en" => Language::En,
                _ => anyhow::bail!("Invalid language '{}', expected bn|en", value),
            };
            let mut settings = store.data().settings;
            settings.language = language;
            store.update_settings(settings)?;
            println!("Language set to {}", value.to_lowercase());
        }
        Some(("theme", sub)) => {
            let value = sub.get_one::<String>("value").unwrap();
            let theme = match value.to_lowercase().as_str() {
                "light" => Theme::Light,
                "dark" => Theme::Dark,
                _ => anyhow::bail!("Invalid theme '{}', expected light|dark", value),
            };
            let mut settings = store.data().settings;
            settings.theme = theme;
            store.update_settings(settings)?;
            println!("Theme set to {}", value.to_lowercase());
        }
        _ => {}
    }
    Ok(())
}
