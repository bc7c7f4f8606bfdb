pub mod coin;
pub mod crypto;
pub mod hash;
pub mod public_key;
pub mod transaction;
pub mod transaction_handler;
pub mod utxo_pool;

pub use self::{
    coin::*, crypto::*, hash::*, public_key::*, transaction::*, transaction_handler::*,
    utxo_pool::*,
};
