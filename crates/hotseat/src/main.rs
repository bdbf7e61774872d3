//! Hotseat chess in the terminal.
//!
//! Two players share the keyboard. Each line typed is turned into clicks on
//! board squares and fed to the rules engine; the board is redrawn after
//! every line.

mod config;
mod input;
mod render;

use anyhow::Context;
use clap::Parser;
use config::Config;
use hotseat_engine::{Outcome, Session};
use input::{parse_line, Command, HELP};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hotseat")]
#[command(about = "Two-player chess on one terminal")]
struct Cli {
    /// Path to a TOML config file (defaults to ./hotseat.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Draw pieces as letters instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,
    /// Tracing filter, overriding the config file (e.g. "debug")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if cli.ascii {
        config.display.unicode = false;
    }

    let filter = cli.log_level.as_deref().unwrap_or(&config.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting hotseat");
    run(&config, io::stdin().lock(), io::stdout().lock())?;
    tracing::info!("Shutting down");
    Ok(())
}

/// Reads commands until quit or end of input, redrawing after each one.
fn run(config: &Config, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let mut session = Session::new();
    draw(&session, config, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Restart => session.restart(),
            Command::Deselect => {
                session.deselect();
            }
            Command::Events(events) => {
                for event in events {
                    match session.handle(event) {
                        Outcome::Quit => return Ok(()),
                        Outcome::Rejected(square) => {
                            writeln!(out, "Cannot move there: {}", square)?;
                        }
                        Outcome::Ignored if !session.game().is_over() => {
                            writeln!(out, "Select one of your own pieces")?;
                        }
                        _ => {}
                    }
                }
            }
        }

        draw(&session, config, &mut out)?;
    }
    Ok(())
}

fn draw(session: &Session, config: &Config, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", render::render_board(session, &config.display))?;
    if let Some(last) = render::render_last_move(session) {
        writeln!(out, "Last move: {}", last)?;
    }
    writeln!(out, "{}", render::render_status(session))?;
    if session.game().is_over() {
        writeln!(out, "Type 'new' to play again or 'quit' to leave.")?;
    }
    out.flush()
}
