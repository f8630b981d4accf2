//! Coercion of loosely typed call arguments into ABI values.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{hex, Address, B256, I256, U256};
use serde_json::Value;

/// A call argument after the hex pre-pass.
#[derive(Debug)]
enum Arg<'a> {
    /// A `0x` prefixed string, already converted to raw bytes.
    Raw(Vec<u8>),
    /// Any other argument, encoded according to its declared type.
    Json(&'a Value),
}

impl<'a> Arg<'a> {
    fn new(value: &'a Value) -> Result<Self, String> {
        match value {
            Value::String(s) if s.starts_with("0x") => {
                hex::decode(&s[2..]).map(Self::Raw).map_err(|err| format!("{s:?}: {err}"))
            }
            value => Ok(Self::Json(value)),
        }
    }
}

/// Coerces a positional argument into a value of the declared type.
pub(crate) fn coerce_arg(ty: &DynSolType, value: &Value) -> Result<DynSolValue, String> {
    match Arg::new(value)? {
        Arg::Raw(bytes) => coerce_raw(ty, bytes),
        Arg::Json(value) => coerce_json(ty, value),
    }
}

fn coerce_raw(ty: &DynSolType, bytes: Vec<u8>) -> Result<DynSolValue, String> {
    let len = bytes.len();
    match ty {
        DynSolType::Address if len == 20 => Ok(DynSolValue::Address(Address::from_slice(&bytes))),
        DynSolType::FixedBytes(size) if len <= *size => {
            let mut word = B256::ZERO;
            word[..len].copy_from_slice(&bytes);
            Ok(DynSolValue::FixedBytes(word, *size))
        }
        DynSolType::Bytes => Ok(DynSolValue::Bytes(bytes)),
        DynSolType::Uint(bits) if len <= 32 => {
            uint(U256::from_be_slice(&bytes), *bits).map(|v| DynSolValue::Uint(v, *bits))
        }
        DynSolType::Int(bits) if len <= 32 => {
            int(twos_complement(&bytes), *bits).map(|v| DynSolValue::Int(v, *bits))
        }
        DynSolType::String => String::from_utf8(bytes)
            .map(DynSolValue::String)
            .map_err(|err| format!("invalid utf-8 string: {err}")),
        ty => Err(format!("cannot encode {len} raw bytes as {ty}")),
    }
}

fn coerce_json(ty: &DynSolType, value: &Value) -> Result<DynSolValue, String> {
    match (ty, value) {
        (DynSolType::Bool, Value::Bool(b)) => Ok(DynSolValue::Bool(*b)),
        (DynSolType::Uint(bits), Value::Number(n)) => {
            let n = n.as_u64().ok_or_else(|| format!("{n} is not an unsigned integer"))?;
            uint(U256::from(n), *bits).map(|v| DynSolValue::Uint(v, *bits))
        }
        (DynSolType::Int(bits), Value::Number(n)) => {
            let n = n.as_i64().ok_or_else(|| format!("{n} is not an integer"))?;
            let value = I256::try_from(n).map_err(|err| format!("{n}: {err}"))?;
            int(value, *bits).map(|v| DynSolValue::Int(v, *bits))
        }
        (ty, Value::String(s)) => ty.coerce_str(s).map_err(|err| err.to_string()),
        (DynSolType::Array(inner), Value::Array(items)) => items
            .iter()
            .map(|item| coerce_json(inner, item))
            .collect::<Result<_, _>>()
            .map(DynSolValue::Array),
        (DynSolType::FixedArray(inner, size), Value::Array(items)) => {
            if items.len() != *size {
                return Err(format!("expected {size} items, got {}", items.len()))
            }
            items
                .iter()
                .map(|item| coerce_json(inner, item))
                .collect::<Result<_, _>>()
                .map(DynSolValue::FixedArray)
        }
        (DynSolType::Tuple(types), Value::Array(items)) => {
            if items.len() != types.len() {
                return Err(format!("expected {} tuple items, got {}", types.len(), items.len()))
            }
            types
                .iter()
                .zip(items)
                .map(|(ty, item)| coerce_json(ty, item))
                .collect::<Result<_, _>>()
                .map(DynSolValue::Tuple)
        }
        (ty, value) => Err(format!("cannot encode {value} as {ty}")),
    }
}

/// Checks the value fits in `bits`.
fn uint(value: U256, bits: usize) -> Result<U256, String> {
    if bits < 256 && value.bit_len() > bits {
        return Err(format!("value {value} overflows uint{bits}"))
    }
    Ok(value)
}

/// Checks the value fits in `bits` as a two's complement number.
fn int(value: I256, bits: usize) -> Result<I256, String> {
    if (1..256).contains(&bits) {
        let max = I256::MAX.asr(256 - bits);
        let min = I256::MIN.asr(256 - bits);
        if value > max || value < min {
            return Err(format!("value {value} overflows int{bits}"))
        }
    }
    Ok(value)
}

/// Reads big-endian bytes as a two's complement number of their own length.
fn twos_complement(bytes: &[u8]) -> I256 {
    let fill = if bytes.first().is_some_and(|b| b & 0x80 != 0) { 0xff } else { 0x00 };
    let mut word = [fill; 32];
    word[32 - bytes.len()..].copy_from_slice(bytes);
    I256::from_raw(U256::from_be_bytes(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};
    use serde_json::json;

    #[test]
    fn test_should_convert_hex_strings_to_raw_bytes() -> eyre::Result<()> {
        let addr = "0x00000000000000000000000000000000deadbeef";
        assert_eq!(
            coerce_arg(&DynSolType::Address, &json!(addr)).map_err(eyre::Report::msg)?,
            DynSolValue::Address(address!("0x00000000000000000000000000000000deadbeef"))
        );
        assert_eq!(
            coerce_arg(&DynSolType::Bytes, &json!("0x0102")).map_err(eyre::Report::msg)?,
            DynSolValue::Bytes(vec![1, 2])
        );
        assert_eq!(
            coerce_arg(&DynSolType::FixedBytes(32), &json!("0xff")).map_err(eyre::Report::msg)?,
            DynSolValue::FixedBytes(
                b256!("0xff00000000000000000000000000000000000000000000000000000000000000"),
                32
            )
        );
        assert_eq!(
            coerce_arg(&DynSolType::Uint(256), &json!("0x0100")).map_err(eyre::Report::msg)?,
            DynSolValue::Uint(U256::from(256), 256)
        );
        Ok(())
    }

    #[test]
    fn test_should_coerce_json_values() -> eyre::Result<()> {
        assert_eq!(
            coerce_arg(&DynSolType::Uint(64), &json!(42)).map_err(eyre::Report::msg)?,
            DynSolValue::Uint(U256::from(42), 64)
        );
        assert_eq!(
            coerce_arg(&DynSolType::Int(32), &json!(-7)).map_err(eyre::Report::msg)?,
            DynSolValue::Int(I256::try_from(-7i64).unwrap(), 32)
        );
        assert_eq!(
            coerce_arg(&DynSolType::Uint(256), &json!("1000")).map_err(eyre::Report::msg)?,
            DynSolValue::Uint(U256::from(1000), 256)
        );
        assert_eq!(
            coerce_arg(&DynSolType::Bool, &json!(true)).map_err(eyre::Report::msg)?,
            DynSolValue::Bool(true)
        );
        assert_eq!(
            coerce_arg(&DynSolType::String, &json!("hello")).map_err(eyre::Report::msg)?,
            DynSolValue::String("hello".to_string())
        );

        let ty = DynSolType::Tuple(vec![
            DynSolType::Uint(8),
            DynSolType::Array(Box::new(DynSolType::Address)),
        ]);
        let value = coerce_arg(&ty, &json!([1, ["0x0000000000000000000000000000000000000001"]]))
            .map_err(eyre::Report::msg)?;
        assert_eq!(
            value,
            DynSolValue::Tuple(vec![
                DynSolValue::Uint(U256::from(1), 8),
                DynSolValue::Array(vec![DynSolValue::Address(address!(
                    "0x0000000000000000000000000000000000000001"
                ))]),
            ])
        );

        Ok(())
    }

    #[test]
    fn test_should_bound_signed_arguments() -> eyre::Result<()> {
        let signed = |value: i64, bits| DynSolValue::Int(I256::try_from(value).unwrap(), bits);

        assert_eq!(
            coerce_arg(&DynSolType::Int(8), &json!(-128)).map_err(eyre::Report::msg)?,
            signed(-128, 8)
        );
        assert_eq!(
            coerce_arg(&DynSolType::Int(8), &json!(127)).map_err(eyre::Report::msg)?,
            signed(127, 8)
        );
        assert!(coerce_arg(&DynSolType::Int(8), &json!(128)).is_err());
        assert!(coerce_arg(&DynSolType::Int(8), &json!(-129)).is_err());
        assert!(coerce_arg(&DynSolType::Int(8), &json!(-1000)).is_err());

        // raw bytes are two's complement of their own length.
        assert_eq!(
            coerce_arg(&DynSolType::Int(8), &json!("0xff")).map_err(eyre::Report::msg)?,
            signed(-1, 8)
        );
        assert_eq!(
            coerce_arg(&DynSolType::Int(16), &json!("0xfc18")).map_err(eyre::Report::msg)?,
            signed(-1000, 16)
        );
        assert_eq!(
            coerce_arg(&DynSolType::Int(256), &json!("0x7f")).map_err(eyre::Report::msg)?,
            signed(127, 256)
        );
        assert!(coerce_arg(&DynSolType::Int(8), &json!("0x00ff")).is_err());
        assert!(coerce_arg(&DynSolType::Int(8), &json!("0xfc18")).is_err());

        Ok(())
    }

    #[test]
    fn test_should_reject_mismatched_arguments() {
        assert!(coerce_arg(&DynSolType::Address, &json!("0x1234")).is_err());
        assert!(coerce_arg(&DynSolType::Uint(8), &json!(256)).is_err());
        assert!(coerce_arg(&DynSolType::Bool, &json!(1)).is_err());
        assert!(coerce_arg(&DynSolType::Bytes, &json!("0xzz")).is_err());
        let pair = DynSolType::FixedArray(Box::new(DynSolType::Bool), 2);
        assert!(coerce_arg(&pair, &json!([true])).is_err());
    }
}
