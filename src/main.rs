use clap::Parser;
use hcae::cli::{
    handle_check, handle_completions, handle_config_init, handle_inventory, Cli, Commands,
    ConfigCommands,
};
use hcae::inventory::InventoryError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Check(args) => match handle_check(&args).await {
            Ok(outcome) => outcome.exit_code(),
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Commands::Inventory(args) => match handle_inventory(&args).await {
            Ok(_) => 0,
            Err(e) => {
                eprintln!("Error: {}", e);
                e.downcast_ref::<InventoryError>()
                    .map(InventoryError::exit_code)
                    .unwrap_or(1)
            }
        },
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => match handle_config_init(&args) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            },
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            0
        }
    };

    std::process::exit(code);
}
