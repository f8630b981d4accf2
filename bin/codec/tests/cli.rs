//! End to end tests of the command line.

use clap::Parser;
use l2_codec_cli::Cli;
use serde_json::{json, Value};
use std::path::PathBuf;

const ABI: &str = r#"[
    {"type":"function","name":"foo","inputs":[],"outputs":[],"stateMutability":"nonpayable"},
    {"type":"function","name":"balanceOf","inputs":[{"name":"account","type":"address"}],"outputs":[{"name":"balance","type":"uint256"}],"stateMutability":"view"}
]"#;

fn run(args: &[&str]) -> eyre::Result<Value> {
    let cli = Cli::try_parse_from(std::iter::once("l2-codec").chain(args.iter().copied()))?;
    cli.command.run(&cli.global)
}

fn abi_file(name: &str) -> eyre::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("l2-codec-{}-{name}.json", std::process::id()));
    std::fs::write(&path, ABI)?;
    Ok(path)
}

#[test]
fn test_should_encode_then_decode_deposit() -> eyre::Result<()> {
    let fields = json!({
        "sourceHash": format!("0x{}", "11".repeat(32)),
        "from": format!("0x{}", "22".repeat(20)),
        "to": format!("0x{}", "33".repeat(20)),
        "value": 1000,
        "gasLimit": 21000,
    })
    .to_string();

    let encoded = run(&["encode-tx", &fields])?;
    let raw = encoded["raw"].as_str().ok_or_else(|| eyre::eyre!("missing raw"))?;
    assert_eq!(
        raw,
        format!(
            "0x7ef854a0{}94{}94{}808203e8825208{}",
            "11".repeat(32),
            "22".repeat(20),
            "33".repeat(20),
            "0080"
        )
    );

    let decoded = run(&["decode-tx", raw])?;
    assert_eq!(decoded["hash"], encoded["hash"]);
    assert_eq!(decoded["value"], "1000");
    assert_eq!(decoded["gasLimit"], "21000");
    assert_eq!(decoded["isSystemTx"], false);
    Ok(())
}

#[test]
fn test_should_compute_alias_and_source_hash() -> eyre::Result<()> {
    let aliased = run(&["alias", "0x0000000000000000000000000000000000000000"])?;
    assert_eq!(aliased["address"], "0x1111000000000000000000000000000000001111");

    let undone = run(&["alias", "--undo", "0x1111000000000000000000000000000000001111"])?;
    assert_eq!(undone["address"], "0x0000000000000000000000000000000000000000");

    let block_hash = format!("0x{}", "ab".repeat(32));
    let user_deposit = |log_index| {
        run(&[
            "source-hash",
            "--origin",
            "0",
            "--l1-block-hash",
            &block_hash,
            "--log-index",
            log_index,
        ])
    };
    assert_ne!(user_deposit("1")?["sourceHash"], user_deposit("2")?["sourceHash"]);
    assert!(run(&["source-hash", "--origin", "0", "--log-index", "1"]).is_err());

    assert!(run(&["source-hash", "--origin", "3", "--intent", "0x01"]).is_err());
    Ok(())
}

#[test]
fn test_should_build_call_data_and_decode_result() -> eyre::Result<()> {
    let abi = abi_file("calls")?;
    let abi = abi.to_str().ok_or_else(|| eyre::eyre!("non utf-8 path"))?;

    let call = run(&["--abi", abi, "call-data", "foo"])?;
    assert_eq!(call["data"], format!("0xc2985578{}", "0".repeat(64)));

    let raw = format!("0x{:064x}", 42);
    let result = run(&["--abi", abi, "decode-result", "balanceOf", &raw])?;
    assert_eq!(result, json!({"balance": "42"}));

    let empty = run(&["--abi", abi, "decode-result", "balanceOf", "0x"])?;
    assert_eq!(empty, Value::Null);

    assert!(run(&["--abi", abi, "call-data", "missing"]).is_err());
    assert!(run(&["call-data", "foo"]).is_err());
    Ok(())
}
