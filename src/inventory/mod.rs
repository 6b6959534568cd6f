//! Ansible inventory generation from Terraform outputs.
//!
//! Each configured host reads its address from a named Terraform output and
//! becomes one `ansible_host=... ansible_user=...` line under the host group.
//! Hosts whose output is missing or empty are skipped with a warning.

mod error;
mod outputs;
mod terraform;

pub use error::InventoryError;
pub use outputs::{parse_outputs, OutputEntry, TerraformOutputs};
pub use terraform::TerraformCli;

use crate::config::InventoryConfig;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Where Terraform outputs come from.
#[derive(Debug, Clone)]
pub enum OutputsSource {
    /// Run `terraform output -json` in this root directory
    TerraformDir(PathBuf),
    /// Read a saved `terraform output -json` document
    File(PathBuf),
}

impl OutputsSource {
    /// Load outputs from this source.
    pub async fn load(&self, terraform: &TerraformCli) -> Result<TerraformOutputs, InventoryError> {
        match self {
            OutputsSource::TerraformDir(dir) => terraform.outputs(dir).await,
            OutputsSource::File(path) => {
                let body = tokio::fs::read_to_string(path).await?;
                parse_outputs(&body)
            }
        }
    }
}

/// A rendered inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    /// INI text, newline terminated
    pub text: String,
    /// Outputs that were missing or empty, in host order
    pub missing_outputs: Vec<String>,
}

/// Render the inventory for `config` from `outputs`.
pub fn build_inventory(outputs: &TerraformOutputs, config: &InventoryConfig) -> Inventory {
    let mut text = String::new();
    let mut missing_outputs = Vec::new();

    let _ = writeln!(text, "[{}]", config.group);
    for host in &config.hosts {
        match outputs.extract_ip(&host.output) {
            Some(ip) => {
                let _ = writeln!(
                    text,
                    "{} ansible_host={} ansible_user={}",
                    host.name, ip, host.user
                );
            }
            None => {
                tracing::warn!(
                    host = %host.name,
                    output = %host.output,
                    "Terraform output not found or empty, skipping host"
                );
                missing_outputs.push(host.output.clone());
            }
        }
    }

    let _ = writeln!(text);
    let _ = writeln!(text, "[all:vars]");
    let _ = writeln!(
        text,
        "ansible_python_interpreter={}",
        config.python_interpreter
    );

    Inventory {
        text,
        missing_outputs,
    }
}

/// Write `inventory` to `path`, creating parent directories as needed.
pub async fn write_inventory(path: &Path, inventory: &Inventory) -> Result<(), InventoryError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, &inventory.text).await?;

    tracing::info!(path = %path.display(), "Wrote inventory");
    Ok(())
}
