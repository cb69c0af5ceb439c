//! MolPay configuration tool
//!
//! Builds MolPay configurations from a TOML file and moves them in and out
//! of their base64 parcel form.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::Overrides;
use molpay_sdk::{Environment, Locale};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// MolPay configuration tool - build, encode and inspect configurations
#[derive(Parser, Debug)]
#[command(name = "molpay-tool")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a configuration and print it as a base64 parcel
    Encode {
        /// Path to the configuration file
        #[arg(short, long, default_value = "./molpay-config.toml")]
        config: PathBuf,

        /// Override the shopper locale (e.g., th-TH)
        #[arg(long)]
        locale: Option<Locale>,

        /// Override the environment (e.g., test, live, apse)
        #[arg(short, long)]
        environment: Option<Environment>,

        /// Override the client key
        #[arg(long, env = "MOLPAY_CLIENT_KEY", hide_env_values = true)]
        client_key: Option<String>,

        /// Reject client keys that do not match the environment
        #[arg(long, default_value = "false")]
        strict: bool,
    },
    /// Decode a base64 parcel and print it as JSON
    Decode {
        /// The base64 parcel
        parcel: String,

        /// Mask the client key in the output
        #[arg(long, default_value = "false")]
        redact: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::debug!("Starting molpay-tool v{}", env!("CARGO_PKG_VERSION"));

    let output = match args.command {
        Command::Encode {
            config,
            locale,
            environment,
            client_key,
            strict,
        } => {
            let overrides = Overrides {
                shopper_locale: locale,
                environment,
                client_key,
            };
            commands::encode(&config, overrides, strict).map_err(|e| {
                tracing::error!("Failed to build configuration: {}", e);
                e
            })?
        }
        Command::Decode { parcel, redact } => commands::decode(&parcel, redact).map_err(|e| {
            tracing::error!("Failed to decode parcel: {}", e);
            e
        })?,
    };

    println!("{output}");
    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so stdout only carries the command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
