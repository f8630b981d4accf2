//! The deposit transaction codec for the L2.
//!
//! This crate provides:
//! - Deposit transaction building, encoding, decoding and hashing (EIP-2718 type `0x7E`)
//! - Source hash derivation tying a deposit to its L1 origin
//! - L1 to L2 address aliasing

pub mod alias;
pub use alias::{alias, undo_alias, ALIAS_OFFSET};

pub mod deposit;
pub use deposit::{
    DepositFields, DepositTransaction, IntegerInput, RawDepositFields, DEPOSIT_TX_TYPE,
};

pub use error::CodecError;
mod error;

pub mod source;
pub use source::{compute_source_hash, DepositSource, SourceHashParams};
