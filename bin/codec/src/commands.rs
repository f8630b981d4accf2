use crate::{Command, GlobalArgs, SourceHashArgs};

use alloy_primitives::{hex, Address};
use eyre::{eyre, WrapErr};
use l2_codec::{
    alias, compute_source_hash, undo_alias, DepositTransaction, RawDepositFields,
    SourceHashParams,
};
use l2_contract::{CallCodec, ContractCodec};
use serde_json::{json, Value};

impl Command {
    /// Runs the command and returns its JSON output.
    pub fn run(&self, global: &GlobalArgs) -> eyre::Result<Value> {
        match self {
            Self::DecodeTx { raw } => {
                let tx = DepositTransaction::decode_hex(raw)?;
                Ok(deposit_to_json(&tx))
            }
            Self::EncodeTx { fields } => {
                let fields: RawDepositFields =
                    serde_json::from_str(fields).wrap_err("invalid deposit fields")?;
                let tx = DepositTransaction::build_raw(fields)?;
                Ok(json!({
                    "raw": hex::encode_prefixed(tx.encode()),
                    "hash": tx.hash(),
                }))
            }
            Self::SourceHash(args) => source_hash(args),
            Self::Alias { address, undo } => {
                let converted = if *undo { undo_alias(*address) } else { alias(*address) };
                Ok(json!({ "address": address_to_json(converted) }))
            }
            Self::CallData { function, args } => {
                let codec = load_codec(global)?;
                let descriptor = codec.resolve(function)?;
                let args: Vec<Value> =
                    serde_json::from_str(args).wrap_err("arguments must be a JSON array")?;
                let data = codec.build_call_data(&descriptor, &args)?;
                Ok(json!({ "data": hex::encode_prefixed(data) }))
            }
            Self::DecodeResult { function, raw } => {
                let codec = load_codec(global)?;
                let descriptor = codec.resolve(function)?;
                let result = codec.decode_result_hex(&descriptor, raw)?;
                Ok(result.map_or(Value::Null, |result| result.to_json()))
            }
        }
    }
}

fn source_hash(args: &SourceHashArgs) -> eyre::Result<Value> {
    let params = SourceHashParams {
        l1_block_hash: args.l1_block_hash,
        l1_log_index: args.log_index,
        seq_number: args.seq_number,
        intent: args.intent.clone(),
    };
    let hash = compute_source_hash(args.origin, &params)?;
    Ok(json!({ "sourceHash": hash }))
}

fn load_codec(global: &GlobalArgs) -> eyre::Result<ContractCodec> {
    let path = global.abi.as_ref().ok_or_else(|| eyre!("--abi is required for this command"))?;
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read abi at {}", path.display()))?;
    tracing::debug!(target: "l2::cli", path = %path.display(), "loaded contract abi");
    Ok(ContractCodec::from_json(&json)?)
}

/// Renders a deposit as JSON, integers as decimal strings.
pub fn deposit_to_json(tx: &DepositTransaction) -> Value {
    json!({
        "type": hex::encode_prefixed([tx.tx_type()]),
        "hash": tx.hash(),
        "sourceHash": tx.source_hash(),
        "from": tx.from().map(address_to_json),
        "to": tx.to().map(address_to_json),
        "mint": tx.mint().to_string(),
        "value": tx.value().to_string(),
        "gasLimit": tx.gas_limit().to_string(),
        "isSystemTx": tx.is_system_tx(),
        "payload": tx.payload(),
    })
}

fn address_to_json(address: Address) -> String {
    format!("{address:#x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, U256};

    #[test]
    fn test_should_render_deposit_json() {
        let tx = DepositTransaction::build(l2_codec::DepositFields {
            from: Some(address!("0xDEADDEADDEADDEADDEADDEADDEADDEADDEAD0001")),
            gas_limit: U256::from(21_000),
            ..Default::default()
        });

        let json = deposit_to_json(&tx);

        assert_eq!(json["type"], "0x7e");
        assert_eq!(json["from"], "0xdeaddeaddeaddeaddeaddeaddeaddeaddead0001");
        assert_eq!(json["to"], Value::Null);
        assert_eq!(json["gasLimit"], "21000");
        assert_eq!(json["payload"], "0x");
        assert_eq!(json["isSystemTx"], false);
    }
}
