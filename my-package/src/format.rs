//! Output formatting utilities for the CLI
//!
//! JSON mode renders every payload as a single compact line so that callers
//! can parse stdout directly. Table mode is for humans and uses colors.

use anyhow::Result;
use colored::*;
use my_package_core::api::{ErrorResponse, GetResponse, ListResponse};
use my_package_core::Item;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tabled::{settings::Style, Table, Tabled};

use crate::config::CliConfig;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single-line JSON
    #[default]
    Json,
    /// Pretty table output
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Table => f.write_str("table"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(format!(
                "Invalid output format '{}'. Must be 'table' or 'json'",
                s
            )),
        }
    }
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Created At")]
    created_at: String,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.cyan().to_string(),
            name: item.name.clone(),
            created_at: item.created_at.dimmed().to_string(),
        }
    }
}

fn item_table<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
    let rows: Vec<ItemRow> = items.into_iter().map(ItemRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the `list` payload
pub fn format_list(response: &ListResponse, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(response)?),
        OutputFormat::Table => {
            let mut output = format!("{} ({})", "Items".bold(), response.count);
            if let Some(filter) = &response.filter {
                output.push_str(&format!("  filter: {}", filter.yellow()));
            }
            output.push('\n');

            if response.items.is_empty() {
                output.push_str(&"No items found".dimmed().to_string());
            } else {
                output.push_str(&item_table(&response.items));
            }

            Ok(output)
        }
    }
}

/// Format the `get` payload
pub fn format_item(response: &GetResponse, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(response)?),
        OutputFormat::Table => match &response.item {
            Some(item) => Ok(format!("{}\n{}", "Item".bold(), item_table([item]))),
            None => Ok("No item".dimmed().to_string()),
        },
    }
}

/// Format the effective configuration. The credential is reported as
/// set/unset only.
pub fn format_config(config: &CliConfig, format: &OutputFormat) -> Result<String> {
    let config_path = config
        .config_path
        .as_ref()
        .map(|p| p.display().to_string());

    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(config)?;
            value["api_key_set"] = serde_json::Value::Bool(config.api_key.is_some());
            Ok(serde_json::to_string(&value)?)
        }
        OutputFormat::Table => {
            let mut output = String::new();
            output.push_str(&"CLI Configuration:".bold().to_string());
            output.push('\n');
            output.push_str(&format!("{:<16} {}\n", "Output Format", config.output_format));
            output.push_str(&format!("{:<16} {}\n", "Verbose", config.verbose));
            output.push_str(&format!("{:<16} {}\n", "Default Limit", config.limit));
            output.push_str(&format!(
                "{:<16} {}\n",
                "Config File",
                config_path.unwrap_or_else(|| "(none)".to_string())
            ));
            output.push_str(&format!(
                "{:<16} {}",
                "API Key",
                if config.api_key.is_some() {
                    "set".green()
                } else {
                    "missing".red()
                }
            ));
            Ok(output)
        }
    }
}

/// Format a structured error
pub fn format_error(response: &ErrorResponse, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(response).unwrap_or_else(|_| {
            format!(
                r#"{{"error":{{"code":"{}","message":"unserializable error"}}}}"#,
                response.error.code
            )
        }),
        OutputFormat::Table => {
            let mut output = format!(
                "{}: {}",
                format!("error[{}]", response.error.code).red().bold(),
                response.error.message
            );
            if let Some(details) = &response.error.details {
                for (key, value) in details {
                    let value = match value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    output.push_str(&format!("\n  {}: {}", key, value));
                }
            }
            output
        }
    }
}
