//! CLI command and subcommand definitions

use clap::{Parser, Subcommand};

use crate::format::OutputFormat;

/// Description of what this tool does
#[derive(Parser, Debug)]
#[command(name = "my-package")]
#[command(version, about = "Description of what this tool does", long_about = None)]
pub struct Cli {
    /// Output format (overrides config file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging (overrides config file)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Don't load config file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Config file path (default: ~/.config/my-package/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items
    List {
        /// Optional filter, echoed back in the output
        filter: Option<String>,

        /// Maximum results [default: 20]
        #[arg(short, long, value_name = "N", value_parser = parse_limit)]
        limit: Option<usize>,
    },

    /// Get a single item by ID
    Get {
        /// Item ID
        id: String,
    },

    /// Show CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
}

/// Parse `--limit` as a base-10, non-negative integer.
///
/// Only ASCII digits are accepted: no sign, no surrounding whitespace.
pub fn parse_limit(value: &str) -> Result<usize, String> {
    let invalid = || format!("'{}' is not a non-negative base-10 integer", value);

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<usize>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("0"), Ok(0));
        assert_eq!(parse_limit("20"), Ok(20));
        assert_eq!(parse_limit("007"), Ok(7));
        assert!(parse_limit(" 7 ").is_err());
        assert!(parse_limit("+5").is_err());
        assert!(parse_limit("").is_err());
        assert!(parse_limit("-1").is_err());
        assert!(parse_limit("abc").is_err());
        assert!(parse_limit("0x10").is_err());
    }

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from(["my-package", "list", "widgets", "--limit", "5"]).unwrap();
        match cli.command {
            Commands::List { filter, limit } => {
                assert_eq!(filter.as_deref(), Some("widgets"));
                assert_eq!(limit, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["my-package", "list", "-l", "1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                filter: None,
                limit: Some(1)
            }
        ));
    }

    #[test]
    fn test_list_rejects_bad_limit() {
        assert!(Cli::try_parse_from(["my-package", "list", "--limit", "lots"]).is_err());
    }

    #[test]
    fn test_get_requires_id() {
        assert!(Cli::try_parse_from(["my-package", "get"]).is_err());

        let cli = Cli::try_parse_from(["my-package", "get", "42"]).unwrap();
        assert!(matches!(cli.command, Commands::Get { ref id } if id == "42"));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["my-package", "get", "1", "--format", "table", "-v"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
    }
}
