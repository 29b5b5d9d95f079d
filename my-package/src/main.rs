//! my-package CLI
//!
//! Description of what this tool does.

use clap::Parser;
use my_package::cli::{run_command, with_error_handling, Cli};
use my_package::config::CliConfig;
use my_package::error::CliResult;
use my_package::format::format_error;
use my_package_core::StubSource;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            let format = cli.format.unwrap_or_default();
            eprintln!("{}", format_error(&e.to_response(), &format));
            return ExitCode::from(e.exit_code());
        }
    };

    init_tracing(config.verbose);

    debug!(
        output_format = %config.output_format,
        config_file = ?config.config_path,
        api_key_set = config.api_key.is_some(),
        "configuration resolved"
    );

    // TODO: swap StubSource for a real ItemSource once the upstream API exists
    let source = StubSource::new();

    let mut stdout = io::stdout().lock();
    let code = with_error_handling(
        config.output_format,
        &mut io::stderr(),
        run_command(cli.command, &config, &source, &mut stdout),
    )
    .await;

    ExitCode::from(code)
}

/// Build configuration using priority chain: defaults → file → env → CLI args
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut builder = CliConfig::builder();

    // Load config file (unless --no-config is specified)
    if !cli.no_config {
        let explicit = cli.config.as_ref().map(PathBuf::from);
        let default = CliConfig::default_path();
        builder = builder.with_config_location(explicit.as_deref(), default.as_deref())?;
    }

    // Environment variables, including API_KEY
    builder = builder.with_env_overrides();

    // CLI argument overrides (highest priority)
    if let Some(format) = cli.format {
        builder = builder.with_output_format(format);
    }
    if cli.verbose {
        builder = builder.with_verbose(true);
    }

    Ok(builder.build())
}

/// Initialize tracing subscriber for logging.
///
/// Logs go to stderr so that stdout only ever carries the command payload.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();
}
