// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;

/// Errors raised while decoding a digit string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("base {base} is outside the supported range 2..=36")]
    InvalidBase { base: u32 },

    #[error("invalid digit {character:?} at position {position} for base {base}")]
    InvalidDigit {
        character: char,
        position: usize,
        base: u32,
    },
}

/// Errors raised while building a share set from its input record.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("malformed input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input record must be a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` must be a non-negative integer, got {value}")]
    InvalidCount { field: &'static str, value: String },

    #[error("share {index} is malformed: {source}")]
    MalformedShare {
        index: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("share {index} has a non-numeric base {base:?}")]
    InvalidBase { index: u64, base: String },

    #[error("share {index} could not be decoded: {source}")]
    Decode {
        index: u64,
        #[source]
        source: DecodeError,
    },

    #[error("duplicate share index {index}")]
    DuplicateIndex { index: u64 },

    #[error("invalid threshold: k={k}, n={n}")]
    InvalidThreshold { k: u64, n: u64 },

    #[error("declared {declared} shares but {present} are present")]
    ShareCountMismatch { declared: u64, present: usize },
}
