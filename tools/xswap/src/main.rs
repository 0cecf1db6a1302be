//! XSwap: operator CLI for hash-lock / time-lock swaps.
//!
//! Subcommands: secrets, hash, hashlock, proof, verify, stage, simulate.
//! Results are printed as JSON on stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swap_telemetry::{log_event, TelemetryConfig};
use xs_03_coordinator::CoordinatorConfig;

mod commands;
mod simulate;

use commands::SideArg;

/// XSwap: hash-lock / time-lock swap toolkit
#[derive(Parser, Debug)]
#[command(name = "xswap", version)]
#[command(about = "Secrets, hash-locks, Merkle proofs and timelock stages for cross-chain swaps")]
struct Args {
    /// Coordinator configuration file (JSON); defaults and XS_* variables otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Generate secrets and the hash-lock committing to them
    Secrets {
        /// Number of fill parts
        #[arg(long, default_value = "1")]
        parts: u32,
    },

    /// Hash a secret
    Hash {
        /// Secret, 0x-prefixed hex
        #[arg(long)]
        secret: String,
    },

    /// Compute the hash-lock for one or more secrets
    Hashlock {
        /// Secrets in fill order, 0x-prefixed hex
        #[arg(long = "secret", required = true, num_args = 1..)]
        secrets: Vec<String>,

        /// Force a Merkle root even for a single secret
        #[arg(long)]
        merkle: bool,
    },

    /// Build the inclusion proof for one fill
    Proof {
        /// Secret hashes in fill order, 0x-prefixed hex
        #[arg(long = "secret-hash", required = true, num_args = 1..)]
        secret_hashes: Vec<String>,

        /// Fill index
        #[arg(long)]
        index: usize,
    },

    /// Check a revealed secret against a hash-lock
    Verify {
        /// Secret, 0x-prefixed hex
        #[arg(long)]
        secret: String,

        /// Fill index (multi-fill only)
        #[arg(long, default_value = "0")]
        index: usize,

        /// Proof siblings, 0x-prefixed hex (multi-fill only)
        #[arg(long = "proof", num_args = 0..)]
        proof: Vec<String>,

        /// Hash-lock stored on the escrow
        #[arg(long)]
        hashlock: String,

        /// Treat the hash-lock as a Merkle root even without proof elements
        #[arg(long)]
        merkle: bool,
    },

    /// Classify an escrow's timelock at a given time
    Stage {
        /// Escrow deployment time, UNIX seconds
        #[arg(long)]
        deployed_at: u64,

        /// Time to classify at, UNIX seconds
        #[arg(long)]
        now: u64,

        /// Escrow side; both when omitted
        #[arg(long, value_enum)]
        side: Option<SideArg>,
    },

    /// Run a full swap against an in-memory relayer and a manual clock
    Simulate {
        /// Number of fill parts
        #[arg(long, default_value = "4")]
        parts: u32,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<CoordinatorConfig> {
    let (config, source) = match path {
        Some(path) => {
            let config = CoordinatorConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            (config, "file")
        }
        None => {
            let config = CoordinatorConfig::from_env();
            config.validate().context("Invalid configuration from environment")?;
            (config, "environment")
        }
    };
    log_event!(
        info,
        "xswap",
        "Configuration loaded",
        source,
        max_parts = config.max_parts,
        relayer_url = %config.relayer_url
    );
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let telemetry = TelemetryConfig::for_service("xswap").verbose(args.verbose);
    swap_telemetry::init_logging(&telemetry).context("Failed to initialize logging")?;

    let output = match args.cmd {
        Cmd::Secrets { parts } => commands::secrets(parts)?,
        Cmd::Hash { secret } => commands::hash(&secret)?,
        Cmd::Hashlock { secrets, merkle } => commands::hashlock(&secrets, merkle)?,
        Cmd::Proof {
            secret_hashes,
            index,
        } => commands::proof(&secret_hashes, index)?,
        Cmd::Verify {
            secret,
            index,
            proof,
            hashlock,
            merkle,
        } => commands::verify(&secret, index, &proof, &hashlock, merkle)?,
        Cmd::Stage {
            deployed_at,
            now,
            side,
        } => {
            let config = load_config(args.config.as_ref())?;
            commands::stage(&config, deployed_at, now, side)?
        }
        Cmd::Simulate { parts } => {
            let config = load_config(args.config.as_ref())?;
            simulate::run(config, parts)
                .await
                .context("Simulation failed")?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
