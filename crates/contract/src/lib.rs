//! Contract call encoding and decoding against a JSON ABI.
//!
//! [`ContractCodec`] wraps an [`alloy_json_abi::JsonAbi`] and exposes the three operations a
//! caller needs: resolving a function, building its call data and decoding its raw result.

mod args;

pub mod descriptor;
pub use descriptor::{FunctionDescriptor, CONSTRUCTOR};

pub use error::CallCodecError;
mod error;

pub mod result;
pub use result::{value_to_json, CallResult};

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_json_abi::JsonAbi;
use alloy_primitives::{hex, Bytes};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
};

/// The call codec of a contract.
pub trait CallCodec {
    /// Returns the descriptor of the function, or of the constructor for [`CONSTRUCTOR`].
    fn resolve(&self, function: &str) -> Result<Arc<FunctionDescriptor>, CallCodecError>;

    /// Returns the call data invoking the function with the positional arguments.
    fn build_call_data(
        &self,
        descriptor: &FunctionDescriptor,
        args: &[Value],
    ) -> Result<Bytes, CallCodecError>;

    /// Decodes the raw result of a call. An empty result decodes to [`None`].
    fn decode_result(
        &self,
        descriptor: &FunctionDescriptor,
        raw: &[u8],
    ) -> Result<Option<CallResult>, CallCodecError>;
}

/// A [`CallCodec`] over a parsed JSON ABI.
///
/// The descriptor table is built on first use and shared afterwards.
#[derive(Debug)]
pub struct ContractCodec {
    abi: JsonAbi,
    descriptors: OnceLock<HashMap<String, Arc<FunctionDescriptor>>>,
}

impl ContractCodec {
    /// Returns a new codec for the ABI.
    pub const fn new(abi: JsonAbi) -> Self {
        Self { abi, descriptors: OnceLock::new() }
    }

    /// Parses a JSON ABI and returns its codec.
    pub fn from_json(json: &str) -> Result<Self, CallCodecError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Returns the wrapped ABI.
    pub const fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Decodes a hex encoded call result, see [`CallCodec::decode_result`].
    pub fn decode_result_hex(
        &self,
        descriptor: &FunctionDescriptor,
        raw: &str,
    ) -> Result<Option<CallResult>, CallCodecError> {
        let raw = hex::decode(raw.trim())?;
        self.decode_result(descriptor, &raw)
    }

    fn descriptors(&self) -> &HashMap<String, Arc<FunctionDescriptor>> {
        self.descriptors.get_or_init(|| descriptor::descriptor_table(&self.abi))
    }
}

impl CallCodec for ContractCodec {
    fn resolve(&self, function: &str) -> Result<Arc<FunctionDescriptor>, CallCodecError> {
        self.descriptors()
            .get(function)
            .cloned()
            .ok_or_else(|| CallCodecError::FunctionNotFound(function.to_string()))
    }

    fn build_call_data(
        &self,
        descriptor: &FunctionDescriptor,
        args: &[Value],
    ) -> Result<Bytes, CallCodecError> {
        let types = descriptor.input_types()?;
        if types.len() != args.len() {
            tracing::debug!(target: "l2::contract", function = descriptor.name(), expected = types.len(), got = args.len(), "argument count mismatch");
            return Err(CallCodecError::ArgumentCount {
                function: descriptor.name().to_string(),
                expected: types.len(),
                got: args.len(),
            })
        }

        let values = types
            .iter()
            .zip(args)
            .enumerate()
            .map(|(index, (ty, arg))| {
                args::coerce_arg(ty, arg)
                    .map_err(|reason| CallCodecError::InvalidArgument { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let encoded = DynSolValue::Tuple(values).abi_encode_params();

        let Some(selector) = descriptor.selector() else {
            tracing::trace!(target: "l2::contract", len = encoded.len(), "encoded constructor arguments");
            return Ok(encoded.into())
        };

        let mut data = Vec::with_capacity(4 + encoded.len().max(32));
        data.extend_from_slice(selector.as_slice());
        if encoded.is_empty() {
            // calls without arguments carry a single zero word.
            data.extend_from_slice(&[0u8; 32]);
        } else {
            data.extend_from_slice(&encoded);
        }
        tracing::trace!(target: "l2::contract", function = descriptor.name(), %selector, len = data.len(), "built call data");

        Ok(data.into())
    }

    fn decode_result(
        &self,
        descriptor: &FunctionDescriptor,
        raw: &[u8],
    ) -> Result<Option<CallResult>, CallCodecError> {
        if raw.is_empty() {
            tracing::trace!(target: "l2::contract", function = descriptor.name(), "empty call result");
            return Ok(None)
        }

        let types = descriptor.output_types()?;
        let decoded = DynSolType::Tuple(types).abi_decode_params(raw).map_err(|err| {
            tracing::debug!(target: "l2::contract", function = descriptor.name(), ?err, "failed to decode call result");
            CallCodecError::Decode(err)
        })?;
        let values = match decoded {
            DynSolValue::Tuple(values) => values,
            value => vec![value],
        };

        let result = if descriptor.has_named_outputs() {
            CallResult::Named(
                descriptor
                    .outputs()
                    .iter()
                    .map(|output| output.name.clone())
                    .zip(values)
                    .collect(),
            )
        } else {
            CallResult::Values(values)
        };
        tracing::trace!(target: "l2::contract", function = descriptor.name(), outputs = result.len(), "decoded call result");

        Ok(Some(result))
    }
}
