use super::{DepositTransaction, DEPOSIT_TX_TYPE};
use crate::CodecError;

use alloy_primitives::{hex, Address, Bytes, B256, U256};
use alloy_rlp::Header;

/// The number of fields a deposit must carry, the trailing payload excluded.
const REQUIRED_FIELDS: usize = 7;

/// The list items in wire order. Items past the payload are skipped.
const FIELDS: [&str; 8] =
    ["source_hash", "from", "to", "mint", "value", "gas_limit", "is_system_tx", "payload"];

impl DepositTransaction {
    /// Decodes a deposit transaction from its hex encoded wire representation. The `0x` prefix is
    /// optional.
    pub fn decode_hex(raw: &str) -> Result<Self, CodecError> {
        let raw = raw.trim();
        let bytes = hex::decode(raw.strip_prefix("0x").unwrap_or(raw))?;
        Self::decode(&bytes)
    }

    /// Decodes a deposit transaction from its wire representation.
    pub fn decode(raw: &[u8]) -> Result<Self, CodecError> {
        let res = decode_deposit(raw);
        match &res {
            Ok(tx) => {
                tracing::trace!(target: "l2::codec::deposit", source_hash = ?tx.source_hash, "decoded deposit")
            }
            Err(err) => {
                tracing::debug!(target: "l2::codec::deposit", ?err, len = raw.len(), "failed to decode deposit")
            }
        }
        res
    }
}

fn decode_deposit(raw: &[u8]) -> Result<DepositTransaction, CodecError> {
    let (&tx_type, mut buf) = raw.split_first().ok_or(CodecError::MissingTransactionType)?;
    if tx_type != DEPOSIT_TX_TYPE {
        return Err(CodecError::TransactionType { expected: DEPOSIT_TX_TYPE, got: tx_type })
    }

    let header = Header::decode(&mut buf)?;
    if !header.list {
        return Err(alloy_rlp::Error::UnexpectedString.into())
    }
    if buf.len() < header.payload_length {
        return Err(alloy_rlp::Error::InputTooShort.into())
    }
    if buf.len() > header.payload_length {
        return Err(alloy_rlp::Error::UnexpectedLength.into())
    }

    // split the list payload into its byte string items.
    let mut fields = Vec::with_capacity(FIELDS.len());
    while !buf.is_empty() {
        let field = FIELDS.get(fields.len()).copied();
        let header = Header::decode(&mut buf)?;
        if buf.len() < header.payload_length {
            return Err(alloy_rlp::Error::InputTooShort.into())
        }
        let (item, rest) = buf.split_at(header.payload_length);
        buf = rest;

        let Some(field) = field else { continue };
        if header.list {
            return Err(CodecError::invalid_field(field, "expected a byte string, got a list"))
        }
        fields.push(item);
    }
    if fields.len() < REQUIRED_FIELDS {
        return Err(CodecError::Parameter { expected: REQUIRED_FIELDS, got: fields.len() })
    }

    Ok(DepositTransaction {
        source_hash: decode_source_hash(fields[0])?,
        from: decode_address(fields[1], "from")?,
        to: decode_address(fields[2], "to")?,
        mint: decode_integer(fields[3], "mint")?,
        value: decode_integer(fields[4], "value")?,
        gas_limit: decode_integer(fields[5], "gas_limit")?,
        is_system_tx: decode_system_flag(fields[6]),
        payload: fields
            .get(REQUIRED_FIELDS)
            .map(|payload| Bytes::copy_from_slice(payload))
            .unwrap_or_default(),
    })
}

fn decode_source_hash(bytes: &[u8]) -> Result<B256, CodecError> {
    if bytes.len() != B256::len_bytes() {
        return Err(CodecError::invalid_field(
            "source_hash",
            format!("expected 32 bytes, got {}", bytes.len()),
        ))
    }
    Ok(B256::from_slice(bytes))
}

fn decode_address(bytes: &[u8], field: &'static str) -> Result<Option<Address>, CodecError> {
    match bytes.len() {
        0 => Ok(None),
        20 => Ok(Some(Address::from_slice(bytes))),
        len => Err(CodecError::invalid_field(field, format!("expected 0 or 20 bytes, got {len}"))),
    }
}

/// Both the empty string and `0x00` read as false. Any other content reads as true and
/// re-encodes as `0x01`.
fn decode_system_flag(bytes: &[u8]) -> bool {
    !matches!(bytes, [] | [0])
}

/// Integers must be minimal big-endian: zero is the empty string and no leading zero byte.
fn decode_integer(bytes: &[u8], field: &'static str) -> Result<U256, CodecError> {
    if bytes.first() == Some(&0) {
        return Err(CodecError::invalid_field(field, "integer has leading zero bytes"))
    }
    U256::try_from_be_slice(bytes).ok_or_else(|| {
        CodecError::invalid_field(field, format!("{} bytes overflow 256 bits", bytes.len()))
    })
}
