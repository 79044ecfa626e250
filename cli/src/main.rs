//! `idewire` - developer tool for the editor/backend wire protocol.
//!
//! Prints the API reference generated from the protocol schemas, checks a
//! committed copy of it for staleness, and validates hand-written messages.
//! The tool is not on the message path; backends link `idewire-protocol`
//! directly.

mod commands;

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{Direction, Format, Freshness};

#[derive(Parser)]
#[command(name = "idewire")]
#[command(about = "Inspect and validate the idewire protocol")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or write the API reference
    Docs {
        #[arg(long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Verify a committed API reference is current (exit 1 if stale)
    Check {
        /// Reference file to check
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
    },
    /// Decode a JSON message and report the value or the decode error
    Validate {
        /// Message type to decode as
        #[arg(long = "as", value_enum)]
        direction: Direction,
        /// Message file; stdin when omitted
        file: Option<PathBuf>,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Docs { format, output } => {
            let rendered = commands::render_docs(format)?;
            match output {
                Some(path) => commands::write_docs(&path, &rendered)?,
                None => print!("{rendered}"),
            }
        }
        Commands::Check { file, format } => match commands::check_docs(&file, format)? {
            Freshness::Current => println!("API reference is current in {}", file.display()),
            Freshness::Stale => {
                eprintln!("API reference is stale in {}", file.display());
                eprintln!("Run `idewire docs --output {}` to update.", file.display());
                process::exit(1);
            }
        },
        Commands::Validate { direction, file } => {
            let text = commands::read_message(file.as_deref())?;
            match commands::validate(direction, &text) {
                Ok(report) => println!("{report}"),
                Err(err) => {
                    eprintln!("invalid {direction}: {err}");
                    process::exit(1);
                }
            }
        }
    }
    Ok(())
}
