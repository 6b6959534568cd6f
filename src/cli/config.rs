//! `hcae config init`

use crate::cli::ConfigInitArgs;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};

/// Commented starter config, identical to `hcae.example.toml` in the repo.
const STARTER_CONFIG: &str = include_str!("../../hcae.example.toml");

/// Write the starter config to `args.output`.
///
/// Without `--force` the file is created exclusively, so an existing config
/// is never clobbered.
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = OpenOptions::new();
    options.write(true);
    if args.force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = match options.open(&args.output) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(format!(
                "{} already exists (pass --force to replace it)",
                args.output.display()
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(STARTER_CONFIG.as_bytes())?;

    println!("✓ Wrote {}", args.output.display());
    println!("  Fill in [probe] host (and [alert] webhook_url) before running `hcae check`.");

    Ok(())
}
