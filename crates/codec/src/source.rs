//! Source hash derivation for deposit transactions.
//!
//! The source hash ties a deposit to the L1 event it originates from. Each origin type hashes its
//! inputs and then hashes the result again behind a single domain byte, so that two origins can
//! never produce the same source hash.

use crate::CodecError;

use alloy_primitives::{Bytes, B256, U256};
use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Origin type of a deposit created by a user on L1.
pub const USER_DEPOSIT_ORIGIN: u8 = 0;

/// Origin type of the L1 attributes deposit.
pub const L1_INFO_ORIGIN: u8 = 1;

/// Origin type of a protocol upgrade deposit.
pub const UPGRADE_ORIGIN: u8 = 2;

/// The L1 event a deposit originates from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DepositSource {
    /// A deposit emitted by the L1 deposit contract.
    UserDeposit {
        /// Hash of the L1 block containing the deposit log.
        l1_block_hash: B256,
        /// Index of the deposit log within the L1 block.
        l1_log_index: u64,
    },
    /// The L1 attributes deposit opening an L2 block.
    L1Info {
        /// Hash of the L1 origin block.
        l1_block_hash: B256,
        /// Sequence number of the L2 block within its epoch.
        seq_number: u64,
    },
    /// A deposit carrying a protocol upgrade.
    Upgrade {
        /// The upgrade intent.
        intent: Bytes,
    },
}

impl DepositSource {
    /// Returns the origin type of the source.
    pub const fn origin_type(&self) -> u8 {
        match self {
            Self::UserDeposit { .. } => USER_DEPOSIT_ORIGIN,
            Self::L1Info { .. } => L1_INFO_ORIGIN,
            Self::Upgrade { .. } => UPGRADE_ORIGIN,
        }
    }

    /// Computes the source hash.
    pub fn source_hash(&self) -> B256 {
        let inner = match self {
            Self::UserDeposit { l1_block_hash, l1_log_index } => {
                sha256(&[l1_block_hash.as_slice(), &word(*l1_log_index)])
            }
            Self::L1Info { l1_block_hash, seq_number } => {
                sha256(&[l1_block_hash.as_slice(), &word(*seq_number)])
            }
            Self::Upgrade { intent } => sha256(&[intent.as_ref()]),
        };
        sha256(&[&[self.origin_type()], inner.as_slice()])
    }

    /// Builds the source for `origin_type` out of the provided parameters.
    pub fn try_from_params(origin_type: u8, params: &SourceHashParams) -> Result<Self, CodecError> {
        let source = match origin_type {
            USER_DEPOSIT_ORIGIN => Self::UserDeposit {
                l1_block_hash: params
                    .l1_block_hash
                    .ok_or(CodecError::MissingSourceParam("l1_block_hash"))?,
                l1_log_index: params
                    .l1_log_index
                    .ok_or(CodecError::MissingSourceParam("l1_log_index"))?,
            },
            L1_INFO_ORIGIN => Self::L1Info {
                l1_block_hash: params
                    .l1_block_hash
                    .ok_or(CodecError::MissingSourceParam("l1_block_hash"))?,
                seq_number: params.seq_number.ok_or(CodecError::MissingSourceParam("seq_number"))?,
            },
            UPGRADE_ORIGIN => Self::Upgrade {
                intent: params.intent.clone().ok_or(CodecError::MissingSourceParam("intent"))?,
            },
            other => return Err(CodecError::InvalidOriginType(other)),
        };
        Ok(source)
    }
}

/// The loose set of inputs a source hash can be derived from.
///
/// Only the parameters required by the selected origin type need to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceHashParams {
    /// Hash of the L1 block.
    pub l1_block_hash: Option<B256>,
    /// Index of the deposit log within the L1 block.
    pub l1_log_index: Option<u64>,
    /// Sequence number of the L2 block within its epoch.
    pub seq_number: Option<u64>,
    /// The upgrade intent.
    pub intent: Option<Bytes>,
}

/// Computes the source hash for the provided origin type and parameters.
///
/// Fails with [`CodecError::InvalidOriginType`] for an origin type outside of `0..=2`.
pub fn compute_source_hash(origin_type: u8, params: &SourceHashParams) -> Result<B256, CodecError> {
    let source = DepositSource::try_from_params(origin_type, params).inspect_err(|err| {
        tracing::debug!(target: "l2::codec::source", origin_type, ?err, "rejected source hash params")
    })?;
    let hash = source.source_hash();
    tracing::trace!(target: "l2::codec::source", origin_type, ?hash, "computed source hash");
    Ok(hash)
}

/// Encodes the integer as a 32-byte big-endian word.
fn word(value: u64) -> [u8; 32] {
    U256::from(value).to_be_bytes::<32>()
}

fn sha256(parts: &[&[u8]]) -> B256 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    B256::from_slice(&hasher.finalize())
}
