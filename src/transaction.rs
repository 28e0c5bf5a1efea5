//! Transaction validation against an unspent-output set

use std::collections::HashSet;

use tracing::debug;

use crate::crypto::{signing_digest, verify_signature};
use crate::error::{LedgerError, Result};
use crate::types::{OutPoint, Transaction, Value};
use crate::utxo::UtxoSet;

/// Rule checker and state mutator over one [`UtxoSet`].
///
/// Every fork node owns exactly one validator state. [`TxValidator::validate`]
/// is side-effect free; [`TxValidator::apply`] mutates the set transaction by
/// transaction.
#[derive(Debug, Clone)]
pub struct TxValidator {
    utxo_set: UtxoSet,
}

impl TxValidator {
    pub fn new(utxo_set: UtxoSet) -> Self {
        Self { utxo_set }
    }

    pub fn utxo_set(&self) -> &UtxoSet {
        &self.utxo_set
    }

    pub fn into_utxo_set(self) -> UtxoSet {
        self.utxo_set
    }

    /// A transaction is valid if and only if:
    /// 1. every output it claims exists in the current UTXO set,
    /// 2. every input signature verifies against the owner key of the
    ///    claimed output, over the signing payload for that input,
    /// 3. no output is claimed twice within the transaction,
    /// 4. every output value is non-negative, and
    /// 5. the claimed input values sum to at least the output values (any
    ///    difference is an implicit fee, not refunded here).
    pub fn validate(&self, tx: &Transaction) -> bool {
        self.check(tx).is_ok()
    }

    /// [`TxValidator::validate`] with the failing rule classified.
    pub fn check(&self, tx: &Transaction) -> Result<()> {
        // 1. Claimed outputs must exist. This also covers cross-transaction
        //    double spends: a consumed output is no longer in the set.
        for input in &tx.inputs {
            if !self.utxo_set.contains(&input.prevout) {
                return Err(LedgerError::UnknownOrSpentOutput(input.prevout));
            }
        }

        // 2. Signatures verify over the per-input signing payload. Rule 1
        //    ran first, so the referenced outputs are present.
        for (index, input) in tx.inputs.iter().enumerate() {
            let owner = match self.utxo_set.get(&input.prevout) {
                Some(output) => output.owner,
                None => return Err(LedgerError::UnknownOrSpentOutput(input.prevout)),
            };
            let digest = signing_digest(&input.prevout, &tx.outputs);
            if !verify_signature(&owner, &digest, &input.signature) {
                return Err(LedgerError::InvalidSignature(index));
            }
        }

        // 3. No output claimed twice by this transaction.
        let mut claimed = HashSet::new();
        for input in &tx.inputs {
            if !claimed.insert(input.prevout) {
                return Err(LedgerError::IntraTxDoubleSpend(input.prevout));
            }
        }

        // 4. Output values are non-negative.
        for (index, output) in tx.outputs.iter().enumerate() {
            if output.value < 0 {
                return Err(LedgerError::NegativeOutputValue(index, output.value));
            }
        }

        // 5. Inputs cover outputs; value creation is not allowed.
        let inputs: Value = tx
            .inputs
            .iter()
            .filter_map(|input| self.utxo_set.get(&input.prevout))
            .map(|output| output.value)
            .sum();
        let outputs: Value = tx.outputs.iter().map(|output| output.value).sum();
        if inputs < outputs {
            return Err(LedgerError::InputsBelowOutputs { inputs, outputs });
        }

        Ok(())
    }

    /// Validate one transaction and, on success, commit it to the set.
    pub fn admit(&mut self, tx: &Transaction) -> Result<()> {
        self.check(tx)?;
        self.commit(tx);
        Ok(())
    }

    /// Single-pass batch admission in the order given; returns the accepted
    /// transactions in acceptance order.
    ///
    /// Each transaction is validated against the set as mutated by the
    /// transactions accepted before it in the same pass. A transaction
    /// spending an output minted within the batch is therefore accepted only
    /// when its producer appears earlier in the sequence; that ordering
    /// contract is inherited from the reference behavior and deliberately
    /// kept.
    pub fn apply(&mut self, txs: &[Transaction]) -> Vec<Transaction> {
        let mut accepted = Vec::new();
        for tx in txs {
            match self.admit(tx) {
                Ok(()) => accepted.push(tx.clone()),
                Err(reason) => {
                    debug!(tx = %hex::encode(tx.hash()), %reason, "transaction rejected");
                }
            }
        }
        accepted
    }

    /// Credit a coinbase's outputs without validation.
    ///
    /// Coinbases have no inputs to check; minted value is not bounded by any
    /// subsidy schedule in this engine.
    pub fn credit_coinbase(&mut self, tx: &Transaction) {
        let txid = tx.hash();
        for (index, output) in tx.outputs.iter().enumerate() {
            self.utxo_set.add(OutPoint { txid, index: index as u32 }, *output);
        }
    }

    fn commit(&mut self, tx: &Transaction) {
        for input in &tx.inputs {
            self.utxo_set.remove(&input.prevout);
        }
        let txid = tx.hash();
        for (index, output) in tx.outputs.iter().enumerate() {
            self.utxo_set.add(OutPoint { txid, index: index as u32 }, *output);
        }
    }
}
