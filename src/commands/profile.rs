// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let p = &store.data().profile;
            let avatar = if p.avatar.is_empty() {
                "(none)".to_string()
            } else {
                p.avatar.clone()
            };
            let rows = vec![
                vec!["Name".into(), p.name.clone()],
                vec!["Email".into(), p.email.clone()],
                vec!["Avatar".into(), avatar],
            ];
            println!("{}", pretty_table(&["Field", "Value"], rows));
        }
        Some(("set", sub)) => {
            let mut profile = store.data().profile.clone();
            if let Some(name) = sub.get_one::<String>("name") {
                profile.name = name.clone();
            }
            if let Some(email) = sub.get_one::<String>("email") {
                profile.email = email.clone();
            }
            if let Some(avatar) = sub.get_one::<String>("avatar") {
                profile.avatar = avatar.clone();
            }
            store.update_profile(profile)?;
            println!("Profile updated");
        }
        _ => {}
    }
    Ok(())
}
