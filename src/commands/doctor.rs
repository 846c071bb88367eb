// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::integrity_report;
use crate::models::AppData;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(data: &AppData) -> Result<()> {
    let issues = integrity_report(data);
    if issues.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows: Vec<Vec<String>> = issues
            .into_iter()
            .map(|i| vec![i.code.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
