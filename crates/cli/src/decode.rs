// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use sss_shares::decode;

pub fn execute(digits: &str, base: u32) -> Result<()> {
    let value = decode(digits, base).with_context(|| format!("Could not decode '{}'", digits))?;
    println!("{}", value);

    Ok(())
}
