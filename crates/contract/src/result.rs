use alloy_dyn_abi::DynSolValue;
use alloy_primitives::hex;
use serde_json::{Map, Value};

/// The decoded outputs of a contract call, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum CallResult {
    /// Positional values, used when at least one output is unnamed.
    Values(Vec<DynSolValue>),
    /// Values keyed by output name, used when every output is named.
    Named(Vec<(String, DynSolValue)>),
}

impl CallResult {
    /// Returns the value of the named output.
    pub fn get(&self, name: &str) -> Option<&DynSolValue> {
        match self {
            Self::Values(_) => None,
            Self::Named(values) => values.iter().find(|(n, _)| n == name).map(|(_, v)| v),
        }
    }

    /// Returns the value at `index`.
    pub fn get_index(&self, index: usize) -> Option<&DynSolValue> {
        match self {
            Self::Values(values) => values.get(index),
            Self::Named(values) => values.get(index).map(|(_, v)| v),
        }
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Named(values) => values.len(),
        }
    }

    /// Returns true if the result holds no value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the values in declaration order, dropping the names.
    pub fn into_values(self) -> Vec<DynSolValue> {
        match self {
            Self::Values(values) => values,
            Self::Named(values) => values.into_iter().map(|(_, v)| v).collect(),
        }
    }

    /// Renders the result as JSON: an array for positional values, an object for named values.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Values(values) => Value::Array(values.iter().map(value_to_json).collect()),
            Self::Named(values) => Value::Object(
                values
                    .iter()
                    .map(|(name, v)| (name.clone(), value_to_json(v)))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}

/// Renders an ABI value as JSON. Integers become decimal strings, addresses and bytes lowercase
/// `0x` prefixed hex.
pub fn value_to_json(value: &DynSolValue) -> Value {
    match value {
        DynSolValue::Bool(b) => Value::Bool(*b),
        DynSolValue::Int(i, _) => Value::String(i.to_string()),
        DynSolValue::Uint(u, _) => Value::String(u.to_string()),
        DynSolValue::FixedBytes(word, size) => Value::String(hex::encode_prefixed(&word[..*size])),
        DynSolValue::Address(address) => Value::String(format!("{address:#x}")),
        DynSolValue::Function(function) => Value::String(hex::encode_prefixed(function.as_slice())),
        DynSolValue::Bytes(bytes) => Value::String(hex::encode_prefixed(bytes)),
        DynSolValue::String(s) => Value::String(s.clone()),
        DynSolValue::Array(values) |
        DynSolValue::FixedArray(values) |
        DynSolValue::Tuple(values) => Value::Array(values.iter().map(value_to_json).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, U256};
    use serde_json::json;

    #[test]
    fn test_should_render_named_result_in_order() {
        let result = CallResult::Named(vec![
            ("zeta".to_string(), DynSolValue::Uint(U256::from(5), 256)),
            (
                "alpha".to_string(),
                DynSolValue::Address(address!("0x00000000000000000000000000000000000000ab")),
            ),
        ]);

        let rendered = serde_json::to_string(&result.to_json()).unwrap();
        assert_eq!(
            rendered,
            r#"{"zeta":"5","alpha":"0x00000000000000000000000000000000000000ab"}"#
        );
        assert_eq!(result.get("zeta"), Some(&DynSolValue::Uint(U256::from(5), 256)));
        assert_eq!(result.get("missing"), None);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_should_render_positional_result() {
        let result = CallResult::Values(vec![
            DynSolValue::Bool(true),
            DynSolValue::Bytes(vec![0xde, 0xad]),
            DynSolValue::Array(vec![DynSolValue::String("a".to_string())]),
        ]);

        assert_eq!(result.to_json(), json!([true, "0xdead", ["a"]]));
        assert_eq!(result.get("anything"), None);
        assert_eq!(result.get_index(0), Some(&DynSolValue::Bool(true)));
    }
}
