//! Shared pool of pending, unconfirmed transactions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Hash, Transaction};

/// Pending transactions keyed by hash, shared across every fork.
///
/// The pool is global, not per-fork: an entry leaves it as soon as any
/// accepted block confirms the transaction, whichever fork that block
/// extends. Insertion performs no validation; a producer must still validate
/// against the current best UTXO set before including a pooled transaction
/// in a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPool {
    pending: HashMap<Hash, Transaction>,
}

impl TransactionPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tx: Transaction) {
        self.pending.insert(tx.hash(), tx);
    }

    pub fn remove(&mut self, txid: &Hash) -> Option<Transaction> {
        self.pending.remove(txid)
    }

    pub fn contains(&self, txid: &Hash) -> bool {
        self.pending.contains_key(txid)
    }

    pub fn get(&self, txid: &Hash) -> Option<&Transaction> {
        self.pending.get(txid)
    }

    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.pending.values()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
