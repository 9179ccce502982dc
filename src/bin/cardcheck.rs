//! Command-line front end for card_validator.
//!
//! # Usage
//!
//! ```bash
//! # Which network does a number belong to?
//! cardcheck type "3782 8224 6310 005"
//!
//! # Full validation, optionally pinned to a network
//! cardcheck validate 4111111111111111 --network visa --output json
//!
//! # Checksum only
//! cardcheck luhn 79927398713
//!
//! # Generate test card numbers
//! cardcheck generate --network amex --count 3
//! ```
//!
//! Logs go to stderr. Set `RUST_LOG` (e.g. `RUST_LOG=cardcheck=debug`) or
//! pass `-v` to see them. Card numbers are only ever logged masked.

use std::process::ExitCode;

use card_validator::{generate, CardNetwork, CardValidator, Report};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Payment card network detection and validation")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the card network from the number's prefix
    Type {
        /// Card number (any formatting)
        card_number: String,
    },

    /// Validate a card number
    Validate {
        /// Card number (any formatting)
        card_number: String,

        /// Require the card to belong to this network
        #[arg(short, long)]
        network: Option<CardNetwork>,

        /// Output format
        #[arg(short, long, default_value = "text", env = "CARDCHECK_OUTPUT")]
        output: OutputFormat,
    },

    /// Check only the Luhn checksum
    Luhn {
        /// Card number (any formatting)
        card_number: String,
    },

    /// Generate test card numbers (for testing only)
    Generate {
        /// Card network to generate
        #[arg(short, long, default_value = "visa")]
        network: CardNetwork,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Type { card_number } => cmd_type(&card_number),
        Commands::Validate {
            card_number,
            network,
            output,
        } => cmd_validate(&card_number, network, output),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Generate { network, count } => cmd_generate(network, count),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_type(card_number: &str) -> ExitCode {
    let card = CardValidator::new(card_number);
    debug!(number = %card.masked(), digits = card.len(), "classifying");

    match card.card_type() {
        Some(network) => {
            println!("{}", network.name());
            ExitCode::SUCCESS
        }
        None => {
            println!("unknown");
            ExitCode::FAILURE
        }
    }
}

fn cmd_validate(card_number: &str, network: Option<CardNetwork>, output: OutputFormat) -> ExitCode {
    let card = CardValidator::new(card_number);
    debug!(number = %card.masked(), expected = ?network, "validating");

    let report = match network {
        Some(expected) => card.report_for(expected),
        None => card.report(),
    };

    match &report.error {
        Some(reason) => info!(number = %report.masked, %reason, "rejected"),
        None => info!(number = %report.masked, network = ?report.network, "accepted"),
    }

    match render(&report, output) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            warn!(error = %e, "failed to serialize report");
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    }

    ExitCode::from(exit_status(report.valid))
}

fn render(report: &Report, output: OutputFormat) -> Result<String, serde_json::Error> {
    match output {
        OutputFormat::Text => {
            let mut lines = vec![
                format!("Valid: {}", if report.valid { "yes" } else { "no" }),
                format!("Network: {}", report.network.map_or("unknown", |n| n.name())),
                format!("Digits: {}", report.length),
                format!("Masked: {}", report.masked),
            ];
            if let Some(reason) = &report.error {
                lines.push(format!("Error: {}", reason));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

fn exit_status(valid: bool) -> u8 {
    if valid {
        0
    } else {
        1
    }
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    let card = CardValidator::new(card_number);
    debug!(number = %card.masked(), "checking luhn");

    if card.is_empty() {
        warn!("no digits in input");
    }

    if card.passes_luhn() {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}

fn cmd_generate(network: CardNetwork, count: usize) -> ExitCode {
    info!(%network, count, "generating test cards");
    for _ in 0..count {
        println!("{}", generate::generate_card(network));
    }
    ExitCode::SUCCESS
}
