use crate::{Coin, Ed25519Verifier, OutputIndex, SignatureVerifier, Transaction, Utxo, UtxoPool};
use std::collections::HashSet;

/// Validates proposed transactions against a pool of unspent outputs and
/// applies the accepted ones to that pool.
///
/// The handler owns its pool: it is constructed from a snapshot and is the
/// only mutator afterwards, so within one `process` call the pool always
/// reflects exactly the candidates accepted so far.
pub struct TransactionHandler<V = Ed25519Verifier> {
    utxo_pool: UtxoPool,
    verifier: V,
}

impl TransactionHandler<Ed25519Verifier> {
    /// Creates a handler whose ledger starts from the given pool.
    /// The snapshot is copied, so later mutations of the handler's pool
    /// don't affect the caller's copy and vice versa.
    pub fn new(utxo_pool: &UtxoPool) -> Self {
        Self::with_verifier(utxo_pool, Ed25519Verifier {})
    }
}

impl<V: SignatureVerifier> TransactionHandler<V> {
    pub fn with_verifier(utxo_pool: &UtxoPool, verifier: V) -> Self {
        Self {
            utxo_pool: utxo_pool.clone(),
            verifier,
        }
    }

    pub fn utxo_pool(&self) -> &UtxoPool {
        &self.utxo_pool
    }

    /// Checks the transaction against the current pool state. A transaction
    /// is valid iff:
    ///   - every input spends an output that is currently in the pool,
    ///   - every input's signature verifies under the owner key recorded on
    ///     the referenced output, over the signing payload for that input's
    ///     position,
    ///   - no output is claimed by more than one input,
    ///   - no declared output amount is negative,
    ///   - the inputs cover the outputs; any difference is an implicit fee.
    ///
    /// A sum that would overflow counts as invalid rather than wrapping.
    /// Never mutates the pool.
    pub fn is_valid(&self, transaction: &Transaction) -> bool {
        let mut claimed = HashSet::new();
        let mut input_sum = Coin::zero();
        for (index, input) in transaction.inputs().iter().enumerate() {
            let utxo = Utxo::new(*input.utxo_id(), *input.output_index());
            let output = match self.utxo_pool.output(&utxo) {
                Some(output) => output,
                None => return false,
            };
            // The owner key comes from the pool entry, not from the transaction.
            if !self.verifier.verify(
                output.to(),
                &transaction.signable_data(index),
                input.signature(),
            ) {
                return false;
            }
            if !claimed.insert(utxo) {
                return false;
            }
            input_sum = match input_sum.checked_add(output.amount()) {
                Some(sum) => sum,
                None => return false,
            };
        }

        let mut output_sum = Coin::zero();
        for output in transaction.outputs() {
            if output.amount().is_negative() {
                return false;
            }
            output_sum = match output_sum.checked_add(output.amount()) {
                Some(sum) => sum,
                None => return false,
            };
        }
        input_sum >= output_sum
    }

    /// Accepts a mutually consistent subset of the candidates and updates the
    /// pool to reflect it. Returns the accepted transactions in the order
    /// they appeared in `candidates`.
    ///
    /// The candidates are processed in a single left-to-right pass, each one
    /// validated against the pool as updated by the acceptances before it.
    /// Hence a transaction may spend an output created earlier in the same
    /// batch, and the earlier of two transactions claiming the same output
    /// wins. Earlier acceptances are never revisited.
    pub fn process(&mut self, candidates: &[Transaction]) -> Vec<Transaction> {
        let mut accepted = Vec::new();
        for transaction in candidates {
            if !self.is_valid(transaction) {
                continue;
            }
            for (index, output) in transaction.outputs().iter().enumerate() {
                let utxo = Utxo::new(*transaction.id(), OutputIndex::new(index as u32));
                self.utxo_pool.add(utxo, output.clone());
            }
            for input in transaction.inputs() {
                let utxo = Utxo::new(*input.utxo_id(), *input.output_index());
                self.utxo_pool.remove(&utxo);
            }
            accepted.push(transaction.clone());
        }
        accepted
    }
}
