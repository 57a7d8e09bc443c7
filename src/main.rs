//! Passguard CLI
//!
//! Hash and verify passwords from the command line. The plaintext is always
//! read from stdin so it never appears in the process list or shell history.

use anyhow::Context;
use clap::{Parser, Subcommand};
use passguard::auth::HashInfo;
use passguard::{ConfigError, HasherConfig, PasswordHasher};
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "passguard", version, about = "Salted bcrypt password hashing")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hash a password read from stdin
    Hash {
        /// Work factor (defaults to PASSWORD_HASH_COST or 12)
        #[arg(long)]
        cost: Option<u32>,
    },
    /// Check a password read from stdin against a stored hash
    Verify {
        /// Stored bcrypt hash
        hash: String,
    },
    /// Show the variant and cost of a stored hash
    Inspect {
        /// Stored bcrypt hash
        hash: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Hash { cost } => {
            let cost = resolve_cost(cost, HasherConfig::load)?;
            let hasher = PasswordHasher::with_cost(cost)?;
            info!(cost = hasher.cost(), "Hashing password from stdin");

            let plain = read_password()?;
            println!("{}", hasher.hash(&plain)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { hash } => {
            let plain = read_password()?;
            let (label, code) = verdict(PasswordHasher::new().verify(&plain, &hash));
            println!("{}", label);
            Ok(ExitCode::from(code))
        }
        Command::Inspect { hash } => match HashInfo::parse(&hash) {
            Some(info) => {
                println!("version: {}", info.version);
                println!("cost: {}", info.cost);
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("not a bcrypt hash");
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

/// Initialize tracing with structured logging on stderr
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .init();
}

/// Read a single line from stdin, dropping only the line terminator
fn read_password() -> anyhow::Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    Ok(strip_line_ending(&line).to_string())
}

/// Drop a trailing `\n` or `\r\n`, keeping any other whitespace
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Pick the work factor, consulting the environment only without `--cost`
fn resolve_cost<F>(flag: Option<u32>, load: F) -> Result<u32, ConfigError>
where
    F: FnOnce() -> Result<HasherConfig, ConfigError>,
{
    match flag {
        Some(cost) => Ok(cost),
        None => load().map(|config| config.cost),
    }
}

/// Output line and exit status for `verify`
fn verdict(valid: bool) -> (&'static str, u8) {
    if valid {
        ("valid", 0)
    } else {
        ("invalid", 1)
    }
}
