//! Core ledger types: output references, transactions, and blocks

use secp256k1::ecdsa::Signature;
use secp256k1::PublicKey;
use serde::{Deserialize, Serialize};

use crate::crypto::{block_digest, transaction_digest};

/// Hash type: 256-bit digest
pub type Hash = [u8; 32];

/// Monetary value in base units. Non-negativity is a validation rule,
/// not a property of the type.
pub type Value = i64;

/// Reference to one output of an earlier transaction: (origin txid, index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: Hash,
    pub index: u32,
}

/// Output record: a value owned by one public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub value: Value,
    pub owner: PublicKey,
}

/// Transaction input: the claimed output reference and a signature over the
/// signing payload for this input (see [`crate::crypto::signing_digest`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prevout: OutPoint,
    pub signature: Signature,
}

/// Transaction: ordered inputs spending earlier outputs, ordered outputs
/// creating new ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<Output>,
}

impl Transaction {
    /// Content-derived transaction hash; the key under which this
    /// transaction's outputs enter the UTXO set.
    pub fn hash(&self) -> Hash {
        transaction_digest(self)
    }
}

/// Block: parent reference (`None` only for genesis), one coinbase
/// transaction minting new value, and the ordered ordinary transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub parent_hash: Option<Hash>,
    pub coinbase: Transaction,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Content-derived block hash.
    pub fn hash(&self) -> Hash {
        block_digest(self)
    }
}
