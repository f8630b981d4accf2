use alloy_primitives::{Address, Bytes, B256};
use std::path::PathBuf;

/// Operator tooling for L2 deposit transactions and contract calls.
#[derive(Debug, clap::Parser)]
#[command(name = "l2-codec", version, about)]
pub struct Cli {
    /// The global arguments.
    #[command(flatten)]
    pub global: GlobalArgs,
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Arguments shared by every command.
#[derive(Debug, Clone, clap::Args)]
pub struct GlobalArgs {
    /// The log filter directives, `RUST_LOG` syntax.
    #[arg(long = "log-filter", env = "L2_CODEC_LOG", value_name = "FILTER", global = true)]
    pub log_filter: Option<String>,
    /// Path to the JSON ABI used by the contract call commands.
    #[arg(long, env = "L2_CODEC_ABI", value_name = "ABI_PATH", global = true)]
    pub abi: Option<PathBuf>,
    /// Pretty print the JSON output.
    #[arg(long, env = "L2_CODEC_PRETTY", global = true)]
    pub pretty: bool,
}

/// The available commands.
#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// Decode a raw deposit transaction.
    DecodeTx {
        /// The hex encoded transaction.
        #[arg(value_name = "RAW_HEX")]
        raw: String,
    },
    /// Build and encode a deposit transaction from its JSON fields.
    EncodeTx {
        /// The fields, as a JSON object with camelCase keys.
        #[arg(value_name = "FIELDS_JSON")]
        fields: String,
    },
    /// Compute the source hash of a deposit.
    SourceHash(SourceHashArgs),
    /// Compute the L2 alias of an L1 address.
    Alias {
        /// The address to convert.
        #[arg(value_name = "ADDRESS")]
        address: Address,
        /// Recover the L1 address from its alias instead.
        #[arg(long)]
        undo: bool,
    },
    /// Build the call data of a contract function.
    CallData {
        /// The function name, or `constructor`.
        #[arg(value_name = "FUNCTION")]
        function: String,
        /// The positional arguments, as a JSON array.
        #[arg(value_name = "ARGS_JSON", default_value = "[]")]
        args: String,
    },
    /// Decode the raw result of a contract call.
    DecodeResult {
        /// The function name.
        #[arg(value_name = "FUNCTION")]
        function: String,
        /// The hex encoded result.
        #[arg(value_name = "RAW_HEX")]
        raw: String,
    },
}

/// The source hash arguments.
#[derive(Debug, Clone, clap::Args)]
pub struct SourceHashArgs {
    /// The origin domain: 0 user deposit, 1 L1 info, 2 upgrade.
    #[arg(long, value_name = "ORIGIN")]
    pub origin: u8,
    /// The hash of the L1 block the deposit originates from.
    #[arg(long = "l1-block-hash", value_name = "HASH")]
    pub l1_block_hash: Option<B256>,
    /// The index of the deposit log in the L1 block.
    #[arg(long = "log-index", value_name = "INDEX")]
    pub log_index: Option<u64>,
    /// The sequence number of the L2 block in its epoch.
    #[arg(long = "seq-number", value_name = "NUMBER")]
    pub seq_number: Option<u64>,
    /// The hex encoded upgrade intent.
    #[arg(long, value_name = "HEX")]
    pub intent: Option<Bytes>,
}
