//! presensi library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules used by the integration tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod signature;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::roll::RollArgs;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use signature::SignatureEngine;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Attendance { action } => cli::commands::attendance::handle(action, cfg),
        Commands::Guest { action } => cli::commands::guest::handle(action, cfg),
        Commands::Seating { file, room } => {
            cli::commands::seating::handle(file, room.as_deref(), cfg)
        }
        Commands::Roll {
            file,
            room,
            all,
            set,
            export,
            format,
            force,
        } => cli::commands::roll::handle(
            &RollArgs {
                file,
                room: room.as_deref(),
                all: *all,
                set,
                export: export.as_deref(),
                format: *format,
                force: *force,
            },
            cfg,
        ),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load()?;

    // 3. command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4. settle the signature engine for the whole run
    cfg.signature.engine = SignatureEngine::resolve(cfg.signature.engine);

    dispatch(&cli, &cfg)
}
