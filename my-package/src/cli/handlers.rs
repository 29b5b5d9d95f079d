//! Command execution handlers

use my_package_core::api::{GetResponse, ListResponse};
use my_package_core::{ItemError, ItemSource};
use std::future::Future;
use std::io::Write;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::exitcode;
use crate::format::{format_config, format_error, format_item, format_list, OutputFormat};

use super::commands::*;

/// Run `action` and turn any failure into a structured error on `err_out`.
///
/// Returns the process exit code. This is the single point where command
/// errors are rendered.
pub async fn with_error_handling<F, W>(format: OutputFormat, err_out: &mut W, action: F) -> u8
where
    F: Future<Output = CliResult<()>>,
    W: Write,
{
    match action.await {
        Ok(()) => exitcode::OK,
        Err(e) => {
            debug!(error = ?e, "command failed");
            let response = e.to_response();
            // Nothing sensible left to do if stderr itself is gone.
            let _ = writeln!(err_out, "{}", format_error(&response, &format));
            e.exit_code()
        }
    }
}

/// Dispatch a parsed command
pub async fn run_command<S, W>(
    command: Commands,
    config: &CliConfig,
    source: &S,
    out: &mut W,
) -> CliResult<()>
where
    S: ItemSource + ?Sized,
    W: Write,
{
    match command {
        Commands::List { filter, limit } => handle_list(source, config, filter, limit, out).await,
        Commands::Get { id } => handle_get(source, config, &id, out).await,
        Commands::Config { command } => handle_config(command, config, out),
        Commands::Completion { shell } => generate_completion(shell, out),
    }
}

/// Handle list command
pub async fn handle_list<S, W>(
    source: &S,
    config: &CliConfig,
    filter: Option<String>,
    limit: Option<usize>,
    out: &mut W,
) -> CliResult<()>
where
    S: ItemSource + ?Sized,
    W: Write,
{
    let credential = config.credential()?;
    let limit = limit.unwrap_or(config.limit);
    // An empty filter means no filter.
    let filter = filter.filter(|f| !f.is_empty());

    info!("Fetching items...");

    let mut items = source
        .fetch_items(credential, filter.as_deref(), limit)
        .await?;
    // A source is not trusted to honor the limit.
    items.truncate(limit);

    let response = ListResponse::new(items, filter);
    writeln!(out, "{}", format_list(&response, &config.output_format)?)?;

    Ok(())
}

/// Handle get command
pub async fn handle_get<S, W>(source: &S, config: &CliConfig, id: &str, out: &mut W) -> CliResult<()>
where
    S: ItemSource + ?Sized,
    W: Write,
{
    if id.trim().is_empty() {
        return Err(ItemError::InvalidInput("item id must not be empty".to_string()).into());
    }

    let credential = config.credential()?;

    info!("Fetching item {}...", id);

    let item = source
        .fetch_item(credential, id)
        .await?
        .ok_or_else(|| ItemError::NotFound(id.to_string()))?;

    let response = GetResponse { item: Some(item) };
    writeln!(out, "{}", format_item(&response, &config.output_format)?)?;

    Ok(())
}

/// Handle config commands
pub fn handle_config<W: Write>(
    command: ConfigCommands,
    config: &CliConfig,
    out: &mut W,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            writeln!(out, "{}", format_config(config, &config.output_format)?)?;
        }
    }

    Ok(())
}

/// Generate shell completion script
pub fn generate_completion<W: Write>(shell: clap_complete::Shell, out: &mut W) -> CliResult<()> {
    use clap::CommandFactory;
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);

    Ok(())
}
