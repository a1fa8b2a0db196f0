// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::Serialize;
use sss_config::OutputFormat;
use sss_shares::Share;
use sss_solver::ReconstructionResult;
use std::fmt;

/// A share that did not fit the accepted polynomial, as it appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrongShare {
    pub index: u64,
    pub base: u32,
    pub value: String,
}

impl From<&Share> for WrongShare {
    fn from(share: &Share) -> Self {
        Self {
            index: share.index(),
            base: share.base(),
            value: share.raw_value().to_string(),
        }
    }
}

/// Outcome for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub file: String,
    /// Decimal, so arbitrarily large secrets survive JSON consumers.
    pub secret: Option<String>,
    pub accepted_shares: Vec<u64>,
    pub wrong_shares: Vec<WrongShare>,
    pub attempts_tried: u128,
    pub total_combinations: u128,
}

impl Report {
    pub fn new(file: impl Into<String>, result: &ReconstructionResult) -> Self {
        Self {
            file: file.into(),
            secret: result.secret().map(ToString::to_string),
            accepted_shares: result.accepted_subset().iter().map(Share::index).collect(),
            wrong_shares: result.wrong_shares().iter().map(WrongShare::from).collect(),
            attempts_tried: result.attempts_tried(),
            total_combinations: result.total_combinations(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(self.to_string()),
        }
    }
}

fn join(indices: impl Iterator<Item = u64>) -> String {
    let joined = indices.map(|i| i.to_string()).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "file: {}", self.file)?;
        match &self.secret {
            Some(secret) => writeln!(f, "secret: {}", secret)?,
            None => writeln!(f, "secret: not recovered")?,
        }
        writeln!(
            f,
            "accepted shares: {}",
            join(self.accepted_shares.iter().copied())
        )?;
        writeln!(
            f,
            "wrong shares: {}",
            join(self.wrong_shares.iter().map(|share| share.index))
        )?;
        write!(
            f,
            "attempts: {} of {}",
            self.attempts_tried, self.total_combinations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use sss_shares::ShareCollection;
    use sss_solver::{AcceptancePolicy, ReconstructionSolver};

    fn five_shares() -> Result<ShareCollection> {
        let shares = [(1, 10, "99"), (2, 10, "7"), (3, 16, "C"), (4, 10, "19"), (5, 10, "28")]
            .into_iter()
            .map(|(index, base, digits)| Share::decode(index, base, digits))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ShareCollection::new(shares)?)
    }

    #[test]
    fn test_report_json() -> Result<()> {
        let solver = ReconstructionSolver::new(AcceptancePolicy::FaultBudget { max_faults: 1 });
        let result = solver.solve(&five_shares()?, 3)?;
        let report = Report::new("shares.json", &result);

        let json: serde_json::Value = serde_json::from_str(&report.render(OutputFormat::Json)?)?;
        assert_eq!(json["secret"], "3");
        assert_eq!(json["accepted_shares"], serde_json::json!([2, 3, 4]));
        assert_eq!(
            json["wrong_shares"],
            serde_json::json!([{ "index": 1, "base": 10, "value": "99" }])
        );
        assert_eq!(json["attempts_tried"], 7);
        assert_eq!(json["total_combinations"], 10);
        Ok(())
    }

    #[test]
    fn test_report_text() -> Result<()> {
        let result = ReconstructionSolver::default().solve(&five_shares()?, 3)?;
        let report = Report::new("shares.json", &result);
        assert_eq!(report.secret, None);
        assert_eq!(
            report.render(OutputFormat::Text)?,
            "file: shares.json\n\
             secret: not recovered\n\
             accepted shares: none\n\
             wrong shares: none\n\
             attempts: 10 of 10"
        );
        Ok(())
    }
}
