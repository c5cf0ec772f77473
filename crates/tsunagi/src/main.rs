//! tsunagi entry point.
//!
//! Saves named Cloud SQL connection profiles to a JSON file so the Cloud SQL
//! Auth Proxy can later be launched from them without retyping project,
//! region, instance, and port.
//!
//! # Usage
//!
//! ```text
//! tsunagi [OPTIONS] <COMMAND>
//!
//! Commands:
//!   add      Validate and save a connection profile
//!   list     Print every saved profile
//!   regions  Print the accepted region codes
//!
//! Options:
//!   --config-file <PATH>  Store path relative to the base directory [default: .tsunagi/config.json]
//!   --base-dir <DIR>      Base directory [default: home directory]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable              | Default                | Description               |
//! |-----------------------|------------------------|---------------------------|
//! | `TSUNAGI_CONFIG_FILE` | `.tsunagi/config.json` | Store path                |
//! | `TSUNAGI_HOME`        | `$HOME`                | Base directory            |
//! | `RUST_LOG`            | `warn`                 | Log filter (stderr)       |

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tsunagi::application::add_profile::ProfileManager;
use tsunagi::infrastructure::storage::paths::{resolve_base_dir, DEFAULT_STORE_PATH};
use tsunagi::infrastructure::storage::FileProfileStore;
use tsunagi_core::{ConnectionProfile, REGIONS};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Save Cloud SQL connection profiles for the Cloud SQL Auth Proxy.
#[derive(Debug, Parser)]
#[command(name = "tsunagi", about = "Save Cloud SQL connection profiles", version)]
struct Cli {
    /// Store file path, relative to the base directory.
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_STORE_PATH,
        env = "TSUNAGI_CONFIG_FILE"
    )]
    config_file: PathBuf,

    /// Base directory the store path is resolved against.
    ///
    /// Defaults to the user's home directory.
    #[arg(long, global = true, env = "TSUNAGI_HOME")]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate and save a connection profile.
    Add(AddArgs),
    /// Print every saved profile in the order it was added.
    List,
    /// Print the accepted region codes.
    Regions,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Profile name.
    #[arg(long)]
    name: String,

    /// Local port for the proxy, between 49152 and 65535.
    #[arg(long)]
    port: u32,

    /// Cloud project ID.
    #[arg(long)]
    project: String,

    /// Region code, e.g. `asia-northeast1`.
    #[arg(long)]
    region: String,

    /// Cloud SQL instance name.
    #[arg(long)]
    instance: String,
}

impl From<AddArgs> for ConnectionProfile {
    fn from(args: AddArgs) -> Self {
        Self {
            name: args.name,
            port: args.port,
            project_name: args.project,
            region: args.region,
            instance_name: args.instance,
        }
    }
}

/// Resolves the store location once for this invocation.
fn open_store(
    base_dir: Option<PathBuf>,
    config_file: &Path,
) -> anyhow::Result<FileProfileStore> {
    let base = resolve_base_dir(base_dir)
        .context("cannot locate the profile store; pass --base-dir or set TSUNAGI_HOME")?;
    FileProfileStore::new(base, config_file).context("invalid --config-file")
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let Cli {
        config_file,
        base_dir,
        command,
    } = cli;

    match command {
        Command::Regions => {
            for region in REGIONS {
                writeln!(out, "{region}")?;
            }
        }
        Command::List => {
            let store = open_store(base_dir, &config_file)?;
            let profiles = store
                .load()
                .with_context(|| format!("failed to read {}", store.path().display()))?;
            for p in &profiles {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}",
                    p.name, p.port, p.project_name, p.region, p.instance_name
                )?;
            }
        }
        Command::Add(args) => {
            let store = open_store(base_dir, &config_file)?;
            let profile = ConnectionProfile::from(args);
            let name = profile.name.clone();
            ProfileManager::new(&store)
                .add(profile)
                .with_context(|| format!("could not add profile '{name}'"))?;
            writeln!(out, "saved profile '{name}' to {}", store.path().display())?;
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `list` / `regions` output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    // Errors are printed once, by anyhow's `Termination` impl.
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
