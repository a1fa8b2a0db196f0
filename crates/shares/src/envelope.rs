// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Parsing of the JSON input record.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   "3": { "base": "10", "value": "12" },
//!   "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! `n` and `k` may also appear at the top level. Share fields are keyed by the decimal index
//! `1..=n`; absent indices are simply not part of the collection.

use crate::errors::EnvelopeError;
use crate::share::{Share, ShareCollection};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// How to reconcile the declared share count `n` with the shares actually present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareCountPolicy {
    /// Use the shares that are present; a shortfall is logged.
    #[default]
    Lenient,
    /// Every index `1..=n` must be present.
    Strict,
}

/// A decoded input record.
#[derive(Debug, Clone)]
pub struct ShareSet {
    /// The `n` declared by the record.
    pub declared_n: u64,
    /// The threshold `k`.
    pub threshold: usize,
    /// The shares present in the record.
    pub shares: ShareCollection,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

impl NumberOrText {
    fn parse(&self) -> Option<u64> {
        match self {
            NumberOrText::Number(n) => Some(*n),
            NumberOrText::Text(text) => text.trim().parse().ok(),
        }
    }

    fn describe(&self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(text) => format!("{text:?}"),
        }
    }
}

#[derive(Deserialize)]
struct RawShare {
    base: NumberOrText,
    value: String,
}

const HEADER_KEYS: [&str; 3] = ["keys", "n", "k"];

/// Parses and decodes an input record.
///
/// Any malformed share aborts the whole parse; no partial share set is returned.
pub fn parse_envelope(input: &str, policy: ShareCountPolicy) -> Result<ShareSet, EnvelopeError> {
    let Value::Object(record) = serde_json::from_str::<Value>(input)? else {
        return Err(EnvelopeError::NotAnObject);
    };

    let header = match record.get("keys") {
        Some(Value::Object(keys)) => keys,
        _ => &record,
    };
    let declared_n = read_count(header, "n")?;
    let k = read_count(header, "k")?;
    if k == 0 || k > declared_n {
        return Err(EnvelopeError::InvalidThreshold { k, n: declared_n });
    }

    let mut fields = Vec::new();
    for (key, field) in &record {
        if HEADER_KEYS.contains(&key.as_str()) {
            continue;
        }
        match key.parse::<u64>() {
            Ok(index) if (1..=declared_n).contains(&index) => fields.push((index, field)),
            Ok(index) => warn!(index, declared_n, "ignoring share outside 1..=n"),
            Err(_) => debug!(key = key.as_str(), "ignoring unknown field"),
        }
    }
    fields.sort_by_key(|(index, _)| *index);

    let mut shares = Vec::with_capacity(fields.len());
    for (index, field) in fields {
        let raw = RawShare::deserialize(field)
            .map_err(|source| EnvelopeError::MalformedShare { index, source })?;
        let base = raw
            .base
            .parse()
            .and_then(|base| u32::try_from(base).ok())
            .ok_or_else(|| EnvelopeError::InvalidBase {
                index,
                base: raw.base.describe(),
            })?;
        let share = Share::decode(index, base, raw.value)
            .map_err(|source| EnvelopeError::Decode { index, source })?;
        debug!(index, base, "decoded share");
        shares.push(share);
    }

    let present = shares.len();
    if present as u64 != declared_n {
        match policy {
            ShareCountPolicy::Strict => {
                return Err(EnvelopeError::ShareCountMismatch {
                    declared: declared_n,
                    present,
                })
            }
            ShareCountPolicy::Lenient => {
                warn!(
                    declared_n,
                    present, "share count differs from declared n; using the shares present"
                );
            }
        }
    }

    Ok(ShareSet {
        declared_n,
        threshold: k as usize,
        shares: ShareCollection::new(shares)?,
    })
}

fn read_count(header: &Map<String, Value>, field: &'static str) -> Result<u64, EnvelopeError> {
    let value = header.get(field).ok_or(EnvelopeError::MissingField(field))?;
    let count = NumberOrText::deserialize(value).map_err(|_| EnvelopeError::InvalidCount {
        field,
        value: value.to_string(),
    })?;
    count.parse().ok_or_else(|| EnvelopeError::InvalidCount {
        field,
        value: value.to_string(),
    })
}
