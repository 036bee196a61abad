use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "nodeweight",
    about = "nodeweight — Slurm node weights from hardware specs",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a scheduler weight for every node in an inventory.
    ///
    /// Nodes are ranked by hardware spec (GPU count, then memory, then
    /// CPU count), smallest first. A numeric `weight` on a node pins its
    /// value; any other `weight` is ignored.
    Weights {
        /// Inventory file (YAML, TOML, or JSON, picked by extension)
        #[arg(short, long)]
        inventory: PathBuf,
        /// Read instances from this top-level section of the inventory
        #[arg(short, long)]
        section: Option<String>,
        /// Only include nodes whose name starts with this prefix
        #[arg(short, long)]
        prefix: Option<String>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Print the inventory entry of one host as JSON ({} if absent)
    Instance {
        /// Inventory file (YAML, TOML, or JSON, picked by extension)
        #[arg(short, long)]
        inventory: PathBuf,
        hostname: String,
    },
    /// Split an option string into tokens, keeping key="value" groups whole
    SplitOptions {
        options: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nodeweight=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Weights { inventory, section, prefix, format } => {
            commands::weights::weights(&inventory, section.as_deref(), prefix.as_deref(), &format)
        }
        Commands::Instance { inventory, hostname } => {
            commands::weights::instance(&inventory, &hostname)
        }
        Commands::SplitOptions { options } => {
            commands::options::split(&options)
        }
    }
}
