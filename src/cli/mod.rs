//! CLI module for hcae
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `check` - Probe a host:port over TCP, alerting when every attempt fails
//! - `inventory` - Generate an Ansible inventory from Terraform outputs
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Check the tunnel endpoint, alerting a webhook on failure
//! hcae check --host 10.100.0.2 --port 22 --webhook https://hooks.example.com/T000
//!
//! # Write ansible/inventory.tf.ini from the Terraform root
//! hcae inventory --tfdir terraform
//! ```

pub mod check;
pub mod completions;
pub mod config;
pub mod inventory;
pub mod output;

pub use check::handle_check;
pub use completions::handle_completions;
pub use config::handle_config_init;
pub use inventory::handle_inventory;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// hcae - Hybrid-cloud automation engine
#[derive(Parser, Debug)]
#[command(
    name = "hcae",
    version,
    about = "Tunnel reachability checks and Terraform-to-Ansible inventory generation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check TCP reachability of a host, alerting when every attempt fails
    Check(CheckArgs),
    /// Generate an Ansible inventory from Terraform outputs
    Inventory(InventoryArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Target host/IP to test (internal endpoint over the tunnel)
    #[arg(long)]
    pub host: Option<String>,

    /// TCP port to test [default: 22]
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Connection timeout in seconds [default: 5.0]
    #[arg(short, long)]
    pub timeout: Option<f64>,

    /// Number of retries before alerting [default: 2]
    #[arg(short, long)]
    pub retries: Option<u32>,

    /// Webhook URL to post alerts to
    #[arg(short, long)]
    pub webhook: Option<String>,

    /// Label used in status and alert messages [default: VPN]
    #[arg(long)]
    pub subject: Option<String>,

    /// Path to configuration file (ignored if missing)
    #[arg(short, long, default_value = "hcae.toml")]
    pub config: PathBuf,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HCAE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct InventoryArgs {
    /// Path to the Terraform root
    #[arg(long, default_value = "terraform", conflicts_with = "outputs_file")]
    pub tfdir: PathBuf,

    /// Read a saved `terraform output -json` document instead of running terraform
    #[arg(long)]
    pub outputs_file: Option<PathBuf>,

    /// Output inventory file
    #[arg(short, long, default_value = "ansible/inventory.tf.ini")]
    pub out: PathBuf,

    /// terraform executable
    #[arg(long, env = "HCAE_TERRAFORM_BIN", default_value = "terraform")]
    pub terraform_bin: PathBuf,

    /// Path to configuration file (ignored if missing)
    #[arg(short, long, default_value = "hcae.toml")]
    pub config: PathBuf,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HCAE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "hcae.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
