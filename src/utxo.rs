//! The unspent-output set: spendable state at one point of one chain path

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{OutPoint, Output};

/// Mapping from output reference to output record.
///
/// Invariant: contains exactly the outputs created by transactions on one
/// chain path that no later transaction on that same path has consumed.
/// `Clone` yields an independent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoSet {
    entries: HashMap<OutPoint, Output>,
}

impl UtxoSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, outpoint: OutPoint, output: Output) {
        self.entries.insert(outpoint, output);
    }

    pub fn remove(&mut self, outpoint: &OutPoint) -> Option<Output> {
        self.entries.remove(outpoint)
    }

    pub fn contains(&self, outpoint: &OutPoint) -> bool {
        self.entries.contains_key(outpoint)
    }

    pub fn get(&self, outpoint: &OutPoint) -> Option<&Output> {
        self.entries.get(outpoint)
    }

    pub fn outpoints(&self) -> impl Iterator<Item = &OutPoint> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OutPoint, &Output)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
