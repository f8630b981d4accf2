use alloy_primitives::hex;

/// An error occurring in the deposit codec.
///
/// Every variant describes malformed input: none of them is transient and retrying the same call
/// yields the same error.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw transaction is empty and carries no type byte.
    #[error("missing transaction type byte")]
    MissingTransactionType,
    /// The leading byte of the raw transaction is not the deposit type.
    #[error("invalid transaction type: expected {expected:#04x}, got {got:#04x}")]
    TransactionType {
        /// The deposit transaction type.
        expected: u8,
        /// The type byte found in the input.
        got: u8,
    },
    /// The decoded field list is shorter than required.
    #[error("invalid parameter count: expected at least {expected}, got {got}")]
    Parameter {
        /// The minimum number of fields.
        expected: usize,
        /// The number of fields found.
        got: usize,
    },
    /// The source hash origin type is unknown.
    #[error("invalid origin type {0}")]
    InvalidOriginType(u8),
    /// A parameter required by the selected origin type is missing.
    #[error("missing source hash parameter {0}")]
    MissingSourceParam(&'static str),
    /// A field has the wrong shape.
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        /// The name of the field.
        field: &'static str,
        /// Why the field was rejected.
        reason: String,
    },
    /// The RLP framing is malformed.
    #[error(transparent)]
    Rlp(#[from] alloy_rlp::Error),
    /// The input is not valid hex.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}

impl CodecError {
    /// Returns a [`CodecError::InvalidField`] for the provided field.
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField { field, reason: reason.into() }
    }
}
