//! Error types for inventory generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop inventory generation.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Terraform root directory is missing
    #[error("Terraform directory does not exist: {0}")]
    TfDirNotFound(PathBuf),

    /// `terraform` could not be started
    #[error("failed to run `{command}` in {dir}: {source}")]
    TerraformSpawn {
        command: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `terraform` ran but exited unsuccessfully
    #[error("`{command}` failed in {dir} ({status}): {stderr}")]
    TerraformFailed {
        command: String,
        dir: PathBuf,
        status: String,
        stderr: String,
    },

    /// Outputs document was not valid JSON of the expected shape
    #[error("failed to parse terraform output -json: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            InventoryError::TfDirNotFound(_) | InventoryError::Io(_) => 1,
            InventoryError::TerraformSpawn { .. } | InventoryError::TerraformFailed { .. } => 2,
            InventoryError::Parse(_) => 3,
        }
    }
}
