use crate::{OutputIndex, TransactionId, TransactionOutput};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// A reference to an unspent transaction output: the transaction that created
/// it and the output's position within that transaction.
#[derive(Debug, Hash, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Utxo {
    transaction_id: TransactionId,
    output_index: OutputIndex,
}

impl Utxo {
    pub fn new(transaction_id: TransactionId, output_index: OutputIndex) -> Self {
        Self {
            transaction_id,
            output_index,
        }
    }

    pub fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    pub fn output_index(&self) -> &OutputIndex {
        &self.output_index
    }
}

impl Display for Utxo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.transaction_id, self.output_index)
    }
}

/// A pool of confirmed and unspent transaction outputs.
/// Every entry represents currency that has been created by some accepted
/// transaction and not yet consumed by any accepted transaction.
#[derive(Debug, Clone)]
pub struct UtxoPool {
    // Unspent transaction outputs, indexed by their transaction ID and their index in the
    // transaction.
    utxos: HashMap<Utxo, TransactionOutput>,
}

impl UtxoPool {
    pub fn new() -> Self {
        Self {
            utxos: HashMap::new(),
        }
    }

    pub fn contains(&self, utxo: &Utxo) -> bool {
        self.utxos.contains_key(utxo)
    }

    pub fn output(&self, utxo: &Utxo) -> Option<&TransactionOutput> {
        self.utxos.get(utxo)
    }

    /// Inserts the output for the given reference, overwriting any previous entry.
    pub fn add(&mut self, utxo: Utxo, output: TransactionOutput) {
        self.utxos.insert(utxo, output);
    }

    /// Removes the entry for the given reference.
    /// Removing an absent reference is a no-op since callers only remove
    /// references they have already observed in the pool.
    pub fn remove(&mut self, utxo: &Utxo) {
        self.utxos.remove(utxo);
    }

    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }

    pub fn utxos(&self) -> impl Iterator<Item = (&Utxo, &TransactionOutput)> {
        self.utxos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coin, PublicKey, Sha256};

    fn utxo(id_byte: u8, index: u32) -> Utxo {
        Utxo::new(
            TransactionId::new(Sha256::digest(&[id_byte])),
            OutputIndex::new(index),
        )
    }

    fn output(amount: i64) -> TransactionOutput {
        TransactionOutput::new(PublicKey::from_raw([1; 32]), Coin::new(amount))
    }

    #[test]
    fn add_then_lookup() {
        let mut pool = UtxoPool::new();
        assert!(!pool.contains(&utxo(1, 0)));
        pool.add(utxo(1, 0), output(50));
        assert!(pool.contains(&utxo(1, 0)));
        assert_eq!(pool.output(&utxo(1, 0)).map(|o| o.amount()), Some(Coin::new(50)));
        assert_eq!(pool.output(&utxo(1, 1)).map(|o| o.amount()), None);
    }

    #[test]
    fn add_overwrites_existing_entry() {
        let mut pool = UtxoPool::new();
        pool.add(utxo(1, 0), output(50));
        pool.add(utxo(1, 0), output(70));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.output(&utxo(1, 0)).map(|o| o.amount()), Some(Coin::new(70)));
    }

    #[test]
    fn remove_deletes_entry() {
        let mut pool = UtxoPool::new();
        pool.add(utxo(1, 0), output(50));
        pool.remove(&utxo(1, 0));
        assert!(pool.is_empty());
    }

    #[test]
    fn remove_of_absent_reference_is_a_noop() {
        let mut pool = UtxoPool::new();
        pool.add(utxo(1, 0), output(50));
        pool.remove(&utxo(2, 0));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn clone_is_independent_of_the_source() {
        let mut pool = UtxoPool::new();
        pool.add(utxo(1, 0), output(50));
        let mut copy = pool.clone();
        copy.remove(&utxo(1, 0));
        copy.add(utxo(2, 0), output(10));
        assert!(pool.contains(&utxo(1, 0)));
        assert!(!pool.contains(&utxo(2, 0)));
    }
}
