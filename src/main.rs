// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use khata::{cli, commands, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = Store::open_default()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            store.save()?;
            println!("Ledger initialized at {}", store.path().display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("savings", sub)) => commands::savings::handle(&mut store, sub)?,
        Some(("debt", sub)) => commands::debts::handle(&mut store, sub)?,
        Some(("party", sub)) => commands::parties::handle(&mut store, sub)?,
        Some(("report", sub)) => commands::reports::handle(store.data(), sub)?,
        Some(("profile", sub)) => commands::profile::handle(&mut store, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut store, sub)?,
        Some(("export", sub)) => commands::backup::export(&store, sub)?,
        Some(("import", sub)) => commands::backup::import(&mut store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(store.data())?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
