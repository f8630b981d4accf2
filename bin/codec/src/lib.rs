//! Command line tooling for L2 deposit transactions and contract calls.

mod args;
pub use args::{Cli, Command, GlobalArgs, SourceHashArgs};

mod commands;
pub use commands::deposit_to_json;
