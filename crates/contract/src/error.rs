use alloy_primitives::hex;

/// An error occurring while encoding or decoding a contract call.
#[derive(Debug, thiserror::Error)]
pub enum CallCodecError {
    /// The contract ABI is not valid JSON.
    #[error("failed to parse contract abi: {0}")]
    Abi(#[from] serde_json::Error),
    /// The ABI does not export the function.
    #[error("function {0} not found in abi")]
    FunctionNotFound(String),
    /// The number of arguments does not match the function inputs.
    #[error("invalid argument count for {function}: expected {expected}, got {got}")]
    ArgumentCount {
        /// The function name.
        function: String,
        /// The number of inputs.
        expected: usize,
        /// The number of arguments provided.
        got: usize,
    },
    /// An argument cannot be encoded as its declared type.
    #[error("invalid argument {index}: {reason}")]
    InvalidArgument {
        /// The position of the argument.
        index: usize,
        /// Why the argument was rejected.
        reason: String,
    },
    /// A declared type cannot be resolved.
    #[error("failed to resolve abi type: {0}")]
    Type(alloy_dyn_abi::Error),
    /// The raw call result does not decode against the declared outputs.
    #[error("failed to decode call result: {0}")]
    Decode(alloy_dyn_abi::Error),
    /// The input is not valid hex.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}
