//! The deposit transaction (type `0x7E`).
//!
//! Deposits are L2 transactions derived from L1 events. They are unsigned: inclusion on L1 is the
//! authorization. The wire form is `0x7E || rlp([source_hash, from, to, mint, value, gas_limit,
//! is_system_tx, payload])`.

mod decode;
mod encode;

pub use encode::DEPOSIT_TX_TYPE;

use crate::CodecError;

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::Deserialize;
use std::str::FromStr;

/// The typed fields of a deposit transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositFields {
    /// Identifier of the L1 event the deposit originates from.
    pub source_hash: B256,
    /// The sender.
    pub from: Option<Address>,
    /// The recipient, [`None`] for a contract creation.
    pub to: Option<Address>,
    /// Value minted on L2.
    pub mint: U256,
    /// Value transferred on L2.
    pub value: U256,
    /// The L2 gas limit.
    pub gas_limit: U256,
    /// Whether the deposit is excluded from the L2 block gas pool.
    pub is_system_tx: bool,
    /// Call data.
    pub payload: Bytes,
}

/// Deposit fields as they arrive from loosely typed sources such as JSON.
///
/// Addresses may use any hex case, integers may be JSON numbers, decimal strings or `0x` hex
/// strings. Missing integers default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDepositFields {
    /// Identifier of the L1 event the deposit originates from.
    pub source_hash: B256,
    /// The sender.
    #[serde(default)]
    pub from: Option<String>,
    /// The recipient.
    #[serde(default)]
    pub to: Option<String>,
    /// Value minted on L2.
    #[serde(default)]
    pub mint: Option<IntegerInput>,
    /// Value transferred on L2.
    #[serde(default)]
    pub value: Option<IntegerInput>,
    /// The L2 gas limit.
    #[serde(default)]
    pub gas_limit: Option<IntegerInput>,
    /// Whether the deposit is a system transaction.
    #[serde(default)]
    pub is_system_tx: bool,
    /// Call data.
    #[serde(default)]
    pub payload: Bytes,
}

/// An integer given either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntegerInput {
    /// A JSON number.
    Number(u64),
    /// A decimal or `0x` prefixed hex string.
    Text(String),
}

impl IntegerInput {
    fn coerce(&self, field: &'static str) -> Result<U256, CodecError> {
        match self {
            Self::Number(n) => Ok(U256::from(*n)),
            Self::Text(s) => U256::from_str(s.trim())
                .map_err(|err| CodecError::invalid_field(field, format!("{s:?}: {err}"))),
        }
    }
}

impl TryFrom<RawDepositFields> for DepositFields {
    type Error = CodecError;

    fn try_from(raw: RawDepositFields) -> Result<Self, Self::Error> {
        let coerce = |input: Option<&IntegerInput>, field| {
            input.map_or(Ok(U256::ZERO), |input| input.coerce(field))
        };

        Ok(Self {
            source_hash: raw.source_hash,
            from: normalize_address(raw.from.as_deref(), "from")?,
            to: normalize_address(raw.to.as_deref(), "to")?,
            mint: coerce(raw.mint.as_ref(), "mint")?,
            value: coerce(raw.value.as_ref(), "value")?,
            gas_limit: coerce(raw.gas_limit.as_ref(), "gas_limit")?,
            is_system_tx: raw.is_system_tx,
            payload: raw.payload,
        })
    }
}

fn normalize_address(
    input: Option<&str>,
    field: &'static str,
) -> Result<Option<Address>, CodecError> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Address::from_str(s)
            .map(Some)
            .map_err(|err| CodecError::invalid_field(field, format!("{s:?}: {err}"))),
    }
}

/// A deposit transaction.
///
/// Instances are obtained from [`DepositTransaction::build`] or [`DepositTransaction::decode`]
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct DepositTransaction {
    source_hash: B256,
    from: Option<Address>,
    to: Option<Address>,
    mint: U256,
    value: U256,
    gas_limit: U256,
    is_system_tx: bool,
    payload: Bytes,
}

impl DepositTransaction {
    /// Builds a deposit transaction from its fields.
    pub fn build(fields: DepositFields) -> Self {
        let DepositFields { source_hash, from, to, mint, value, gas_limit, is_system_tx, payload } =
            fields;
        Self { source_hash, from, to, mint, value, gas_limit, is_system_tx, payload }
    }

    /// Builds a deposit transaction from loosely typed fields, normalizing addresses and coercing
    /// integers.
    pub fn build_raw(fields: RawDepositFields) -> Result<Self, CodecError> {
        Ok(Self::build(fields.try_into()?))
    }

    /// Returns the fields of the transaction.
    pub fn into_fields(self) -> DepositFields {
        let Self { source_hash, from, to, mint, value, gas_limit, is_system_tx, payload } = self;
        DepositFields { source_hash, from, to, mint, value, gas_limit, is_system_tx, payload }
    }

    /// Returns the EIP-2718 type of the transaction, always [`DEPOSIT_TX_TYPE`].
    pub const fn tx_type(&self) -> u8 {
        DEPOSIT_TX_TYPE
    }

    /// Returns the source hash.
    pub const fn source_hash(&self) -> B256 {
        self.source_hash
    }

    /// Returns the sender.
    pub const fn from(&self) -> Option<Address> {
        self.from
    }

    /// Returns the recipient, [`None`] for a contract creation.
    pub const fn to(&self) -> Option<Address> {
        self.to
    }

    /// Returns true if the deposit creates a contract.
    pub const fn is_create(&self) -> bool {
        self.to.is_none()
    }

    /// Returns the value minted on L2.
    pub const fn mint(&self) -> U256 {
        self.mint
    }

    /// Returns the value transferred on L2.
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// Returns the L2 gas limit.
    pub const fn gas_limit(&self) -> U256 {
        self.gas_limit
    }

    /// Returns true if the deposit is a system transaction.
    pub const fn is_system_tx(&self) -> bool {
        self.is_system_tx
    }

    /// Returns the call data.
    pub const fn payload(&self) -> &Bytes {
        &self.payload
    }
}
