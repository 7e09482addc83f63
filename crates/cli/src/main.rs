// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ars - Airline reservation ledger CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod completions;
mod config;
mod desk;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{book, cancel, console, seats, show, update, window};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::desk::Desk;
use crate::error::ArsError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "ars",
    version,
    about = "Airline reservation system - book, move and cancel seats"
)]
struct Cli {
    /// Checkpoint file holding active reservations
    #[arg(long, global = true, env = "ARS_CHECKPOINT")]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Seed the random draws for reproducible bookings
    #[arg(long, global = true, env = "ARS_SEED")]
    seed: Option<u64>,

    /// Log more (repeat for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Book a random free seat
    Book,
    /// Cancel a booking
    Cancel(cancel::CancelArgs),
    /// Move a booking to another seat
    Update(update::UpdateArgs),
    /// Show ticket information
    Show(show::ShowArgs),
    /// Show available seats
    Seats(seats::SeatsArgs),
    /// List window seat tickets
    Window,
    /// Interactive menu (default)
    Console,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ArsError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Console);

    // Completions need neither logging nor a ledger
    if let Commands::Completions(args) = command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let config = Config::resolve(cli.file, cli.format, cli.seed, cli.verbose);
    setup_logging(&config);

    let mut desk = Desk::open(&config);
    let format = config.format;

    match command {
        Commands::Book => book::handle(&mut desk, format)?,
        Commands::Cancel(args) => cancel::handle(&mut desk, args, format)?,
        Commands::Update(args) => update::handle(&mut desk, args, format)?,
        Commands::Show(args) => show::handle(&desk, args, format)?,
        Commands::Seats(args) => seats::handle(&desk, args, format),
        Commands::Window => window::handle(&desk, format),
        Commands::Console => {
            let stdin = std::io::stdin();
            console::run(&mut desk, stdin.lock(), std::io::stdout())?;
        }
        // Handled before the desk is opened
        Commands::Completions(_) => {}
    }

    Ok(())
}

fn setup_logging(config: &Config) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Set up subscriber with env filter; stdout stays for command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_level()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
