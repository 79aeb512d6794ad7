use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable read for a tracing filter directive.
pub const LOG_ENV: &str = "LIBRIS_LOG";

#[derive(Parser, Debug)]
#[command(name = "libris", bin_name = "libris", version)]
#[command(about = "Console catalog for a lending library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Start with an empty catalog instead of the sample data
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Get or set configuration
    Config {
        /// Configuration key (seed, persist-sort, unique-ids)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Install the stderr log subscriber. `LIBRIS_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "libris=debug" } else { "libris=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["libris"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_seed);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["libris", "menu", "--no-seed", "--config-dir", "/tmp/x"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Menu)));
        assert!(cli.no_seed);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn config_takes_optional_key_and_value() {
        let cli = Cli::try_parse_from(["libris", "config", "seed", "off"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("seed"));
                assert_eq!(value.as_deref(), Some("off"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
