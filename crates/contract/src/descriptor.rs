use crate::CallCodecError;

use alloy_dyn_abi::{DynSolType, Specifier};
use alloy_json_abi::{Constructor, Function, JsonAbi, Param, StateMutability};
use alloy_primitives::Selector;
use std::{collections::HashMap, sync::Arc};

/// The name the constructor descriptor is registered under.
pub const CONSTRUCTOR: &str = "constructor";

/// A callable entry of a contract ABI.
///
/// Outputs declared without nested components carry an empty component list, which resolves to
/// the plain declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    name: String,
    inputs: Vec<Param>,
    outputs: Vec<Param>,
    state_mutability: StateMutability,
    selector: Option<Selector>,
}

impl FunctionDescriptor {
    /// Returns the descriptor of an exported function.
    pub fn function(function: &Function) -> Self {
        Self {
            name: function.name.clone(),
            inputs: function.inputs.clone(),
            outputs: function.outputs.clone(),
            state_mutability: function.state_mutability,
            selector: Some(function.selector()),
        }
    }

    /// Returns the synthetic constructor descriptor. An ABI without a declared constructor yields
    /// a constructor without inputs.
    pub fn constructor(constructor: Option<&Constructor>) -> Self {
        Self {
            name: CONSTRUCTOR.to_string(),
            inputs: constructor.map(|c| c.inputs.clone()).unwrap_or_default(),
            outputs: Vec::new(),
            state_mutability: constructor
                .map_or(StateMutability::NonPayable, |c| c.state_mutability),
            selector: None,
        }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the inputs in declaration order.
    pub fn inputs(&self) -> &[Param] {
        &self.inputs
    }

    /// Returns the outputs in declaration order.
    pub fn outputs(&self) -> &[Param] {
        &self.outputs
    }

    /// Returns the state mutability.
    pub const fn state_mutability(&self) -> StateMutability {
        self.state_mutability
    }

    /// Returns the 4-byte selector, [`None`] for the constructor.
    pub const fn selector(&self) -> Option<Selector> {
        self.selector
    }

    /// Returns true for the constructor descriptor.
    pub const fn is_constructor(&self) -> bool {
        self.selector.is_none()
    }

    /// Returns true if every output carries a name.
    pub fn has_named_outputs(&self) -> bool {
        !self.outputs.is_empty() && self.outputs.iter().all(|output| !output.name.is_empty())
    }

    /// Resolves the input types.
    pub fn input_types(&self) -> Result<Vec<DynSolType>, CallCodecError> {
        resolve_all(&self.inputs)
    }

    /// Resolves the output types.
    pub fn output_types(&self) -> Result<Vec<DynSolType>, CallCodecError> {
        resolve_all(&self.outputs)
    }
}

fn resolve_all(params: &[Param]) -> Result<Vec<DynSolType>, CallCodecError> {
    params.iter().map(|param| param.resolve().map_err(CallCodecError::Type)).collect()
}

/// Builds the descriptor table of the ABI. Overloaded functions resolve to their first
/// declaration.
pub(crate) fn descriptor_table(abi: &JsonAbi) -> HashMap<String, Arc<FunctionDescriptor>> {
    let mut table = HashMap::with_capacity(abi.functions.len() + 1);
    for function in abi.functions() {
        table
            .entry(function.name.clone())
            .or_insert_with(|| Arc::new(FunctionDescriptor::function(function)));
    }
    table.insert(
        CONSTRUCTOR.to_string(),
        Arc::new(FunctionDescriptor::constructor(abi.constructor.as_ref())),
    );
    table
}
