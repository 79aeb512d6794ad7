use clap::Parser;
use directories::ProjectDirs;
use libris::api::{self, ConfigAction, LibraryApi};
use libris::commands::CatalogOptions;
use libris::config::LibrisConfig;
use libris::error::{LibrisError, Result};
use libris::store::memory::{MemoryBookStore, MemoryBorrowerStore};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::print::write_messages;
use super::session::Session;
use super::setup::{init_logging, Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_dir = resolve_config_dir(cli.config_dir);

    match cli.command {
        Some(Commands::Config { key, value }) => {
            let dir = config_dir.ok_or_else(|| {
                LibrisError::Config("Could not determine config directory".to_string())
            })?;
            handle_config(&dir, key, value)
        }
        Some(Commands::Menu) | None => handle_menu(config_dir.as_deref(), cli.no_seed),
    }
}

fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        ProjectDirs::from("org", "libris", "libris").map(|dirs| dirs.config_dir().to_path_buf())
    })
}

/// Load config for the interactive session. A broken or missing config never
/// stops the menu from starting.
fn load_session_config(config_dir: Option<&Path>) -> LibrisConfig {
    let Some(dir) = config_dir else {
        tracing::warn!("no config directory available, using defaults");
        return LibrisConfig::default();
    };

    LibrisConfig::load(dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, dir = %dir.display(), "ignoring unreadable config");
        LibrisConfig::default()
    })
}

fn handle_menu(config_dir: Option<&Path>, no_seed: bool) -> Result<()> {
    let mut config = load_session_config(config_dir);
    if no_seed {
        config.load_seed_data = false;
    }

    let mut api = LibraryApi::new(
        MemoryBookStore::new(),
        MemoryBorrowerStore::new(),
        CatalogOptions::from(&config),
    );
    if config.load_seed_data {
        api.seed();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(api, stdin.lock(), stdout.lock()).run()
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api::config(config_dir, action)?;
    let mut out = io::stdout().lock();
    if show_all {
        if let Some(config) = &result.config {
            for (key, value) in config.entries() {
                writeln!(out, "{} = {}", key, value)?;
            }
        }
    }
    write_messages(&mut out, &result.messages)?;
    Ok(())
}
