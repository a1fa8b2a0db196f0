// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::{fs, path::Path};

use crate::report::Report;
use anyhow::{Context, Result};
use sss_config::RecoveryConfig;
use sss_shares::parse_envelope;
use sss_solver::Deadline;
use tracing::{info, warn};

pub fn execute(config: &RecoveryConfig, files: &[impl AsRef<Path>]) -> Result<()> {
    for file in files {
        let report = solve_file(config, file.as_ref())?;
        println!("{}", report.render(config.output)?);
    }

    Ok(())
}

/// Reads, decodes and solves one share file. Any failure aborts with the file name attached.
pub fn solve_file(config: &RecoveryConfig, file: &Path) -> Result<Report> {
    let name = file.display().to_string();
    let input = fs::read_to_string(file).with_context(|| format!("Could not read {}", name))?;
    let set = parse_envelope(&input, config.share_count)
        .with_context(|| format!("Could not parse shares in {}", name))?;

    info!(
        file = %name,
        n = set.declared_n,
        k = set.threshold,
        present = set.shares.len(),
        "solving"
    );

    let deadline = config.deadline().map(Deadline::after);
    let result = config
        .solver()
        .solve_with(&set.shares, set.threshold, &deadline)
        .with_context(|| format!("Could not recover the secret from {}", name))?;

    if !result.is_recovered() {
        warn!(file = %name, "no consistent subset of shares found");
    }

    Ok(Report::new(name, &result))
}
