use clap::Parser;
use l2_codec_cli::{Cli, GlobalArgs};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_tracing_subscriber(&cli.global) {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    tracing::debug!(target: "l2::cli", command = ?cli.command, "running command");
    let output = cli.command.run(&cli.global).and_then(|output| {
        let rendered = if cli.global.pretty {
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string(&output)?
        };
        Ok(rendered)
    });

    match output {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error: {err:?}");
            std::process::exit(1);
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over the `--log-filter` argument.
fn init_tracing_subscriber(args: &GlobalArgs) -> eyre::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(args.log_filter.as_deref().unwrap_or("info")))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(false)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()?;

    Ok(())
}
