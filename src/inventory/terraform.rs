//! Reading outputs from a Terraform root via the terraform CLI.

use super::error::InventoryError;
use super::outputs::{parse_outputs, TerraformOutputs};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Handle on the `terraform` executable.
#[derive(Debug, Clone)]
pub struct TerraformCli {
    binary: PathBuf,
}

impl Default for TerraformCli {
    fn default() -> Self {
        Self::new("terraform")
    }
}

impl TerraformCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn command_line(&self) -> String {
        format!("{} output -json", self.binary.display())
    }

    /// Run `terraform output -json` in `tfdir` and parse what it prints.
    pub async fn outputs(&self, tfdir: &Path) -> Result<TerraformOutputs, InventoryError> {
        if !tfdir.is_dir() {
            return Err(InventoryError::TfDirNotFound(tfdir.to_path_buf()));
        }

        tracing::debug!(dir = %tfdir.display(), command = %self.command_line(), "Reading terraform outputs");

        let output = Command::new(&self.binary)
            .args(["output", "-json"])
            .current_dir(tfdir)
            .output()
            .await
            .map_err(|source| InventoryError::TerraformSpawn {
                command: self.command_line(),
                dir: tfdir.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(InventoryError::TerraformFailed {
                command: self.command_line(),
                dir: tfdir.to_path_buf(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_outputs(&String::from_utf8_lossy(&output.stdout))
    }
}
