//! Rejection classification for the validation engine
//!
//! The public contract of `validate` and `add_block` is boolean; these
//! variants classify each rejection path for diagnostics and tests without
//! changing that signal. No variant is fatal.

use thiserror::Error;

use crate::types::{Hash, OutPoint, Value};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unknown or already spent output {}:{}", hex::encode(.0.txid), .0.index)]
    UnknownOrSpentOutput(OutPoint),

    #[error("invalid signature on input {0}")]
    InvalidSignature(usize),

    #[error("output {}:{} claimed twice by one transaction", hex::encode(.0.txid), .0.index)]
    IntraTxDoubleSpend(OutPoint),

    #[error("negative value {1} on output {0}")]
    NegativeOutputValue(usize, Value),

    #[error("input total {inputs} below output total {outputs}")]
    InputsBelowOutputs { inputs: Value, outputs: Value },

    #[error("parent block {} not known to any fork", hex::encode(.0))]
    OrphanParent(Hash),

    #[error("parent height {parent} beyond the cutoff age at max height {max}")]
    BeyondCutoffAge { parent: u64, max: u64 },

    #[error("block carries no parent reference")]
    MalformedGenesisReference,

    #[error("transaction {} invalid in block: {1}", hex::encode(.0))]
    InvalidBlockTransaction(Hash, Box<LedgerError>),
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, LedgerError>;
