//! Inventory command implementation

use crate::cli::InventoryArgs;
use crate::config::HcaeConfig;
use crate::inventory::{build_inventory, write_inventory, Inventory, OutputsSource, TerraformCli};

/// Handle `hcae inventory`
///
/// Errors carry their own exit status; see [`crate::inventory::InventoryError::exit_code`].
pub async fn handle_inventory(
    args: &InventoryArgs,
) -> Result<Inventory, Box<dyn std::error::Error>> {
    let mut config = HcaeConfig::load_or_default(&args.config)?.with_env_overrides();
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }
    config.validate_inventory()?;
    if let Err(e) = crate::logging::init_tracing(&config.logging) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let source = match args.outputs_file {
        Some(ref path) => OutputsSource::File(path.clone()),
        None => OutputsSource::TerraformDir(args.tfdir.clone()),
    };
    let outputs = source
        .load(&TerraformCli::new(args.terraform_bin.clone()))
        .await?;

    let inventory = build_inventory(&outputs, &config.inventory);
    for output in &inventory.missing_outputs {
        eprintln!(
            "Warning: {} not found in terraform outputs or empty",
            output
        );
    }

    write_inventory(&args.out, &inventory).await?;

    println!("Wrote inventory to {}\n", args.out.display());
    print!("{}", inventory.text);

    Ok(inventory)
}
