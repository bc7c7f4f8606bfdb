use crate::{Coin, PublicKey, Sha256, Signature};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A double SHA-256 hash of the transaction data.
#[derive(Debug, Hash, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct TransactionId(Sha256);

impl Display for TransactionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TransactionId {
    pub const fn new(data: Sha256) -> Self {
        Self(data)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0.as_slice()
    }
}

/// The index of the transaction output, the first one is 0.
#[derive(Debug, Hash, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct OutputIndex(u32);

impl Display for OutputIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl OutputIndex {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn to_be_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInput {
    // A pointer to the transaction containing the output to be spent.
    utxo_id: TransactionId,
    // The number of the output to be spent within that transaction.
    output_index: OutputIndex,
    // Signature over the signing payload for this input's position.
    signature: Signature,
}

impl Display for TransactionInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.utxo_id, self.output_index)
    }
}

impl TransactionInput {
    pub fn new(utxo_id: TransactionId, output_index: OutputIndex, signature: Signature) -> Self {
        Self {
            utxo_id,
            output_index,
            signature,
        }
    }

    pub fn utxo_id(&self) -> &TransactionId {
        &self.utxo_id
    }

    pub fn output_index(&self) -> &OutputIndex {
        &self.output_index
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionOutput {
    to: PublicKey,
    amount: Coin,
}

impl Display for TransactionOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.amount, self.to)
    }
}

impl TransactionOutput {
    pub fn new(to: PublicKey, amount: Coin) -> Self {
        Self { to, amount }
    }

    pub fn to(&self) -> &PublicKey {
        &self.to
    }

    pub fn amount(&self) -> Coin {
        self.amount
    }
}

/// The exact bytes that must be signed for an input that spends the given
/// output: the outpoint being spent followed by every declared output.
/// Signatures commit to where the money goes, and since the payload contains
/// no signature bytes it can be produced before any input is signed.
pub fn signing_payload(
    utxo_id: &TransactionId,
    output_index: &OutputIndex,
    outputs: &[TransactionOutput],
) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(utxo_id.as_slice());
    data.extend_from_slice(&output_index.to_be_bytes());
    for output in outputs {
        data.extend_from_slice(&output.amount().to_be_bytes());
        data.extend_from_slice(output.to().as_slice());
    }
    data
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
}

impl Transaction {
    pub fn new(inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>) -> Self {
        let id = Self::hash_transaction_data(&inputs, &outputs);
        Self {
            id,
            inputs,
            outputs,
        }
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn inputs(&self) -> &Vec<TransactionInput> {
        &self.inputs
    }

    pub fn outputs(&self) -> &Vec<TransactionOutput> {
        &self.outputs
    }

    /// The message that must have been signed for the input at the given position.
    pub fn signable_data(&self, input_index: usize) -> Vec<u8> {
        let input = &self.inputs[input_index];
        signing_payload(input.utxo_id(), input.output_index(), &self.outputs)
    }

    fn hash_transaction_data(
        inputs: &Vec<TransactionInput>,
        outputs: &Vec<TransactionOutput>,
    ) -> TransactionId {
        let mut data = Vec::new();
        for input in inputs {
            data.extend_from_slice(input.utxo_id().as_slice());
            data.extend_from_slice(&input.output_index().to_be_bytes());
            data.extend_from_slice(input.signature().as_slice());
        }
        for output in outputs {
            data.extend_from_slice(&output.amount().to_be_bytes());
            data.extend_from_slice(output.to().as_slice());
        }
        let first_hash = Sha256::digest(&data);
        let second_hash = Sha256::digest(first_hash.as_slice());
        TransactionId::new(second_hash)
    }
}
