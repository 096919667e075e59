mod cli;

use clap::Parser;
use cli::{Cli, Commands, ImportArgs};
use std::path::Path;
use tracing::{error, info, Level};
use wiki_flag::{
    FlagImporter, ImportOutcome, LocalStorage, ReqwestClient, Result, EXIT_REJECTED,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Import(args) => handle_import_command(args, &cli.output).await,
    };

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Operation failed: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn handle_import_command(args: &ImportArgs, output_dir: &Path) -> Result<i32> {
    info!("Importing flag for '{}' into {}", args.place, output_dir.display());

    let importer = FlagImporter::new(ReqwestClient::new(), LocalStorage::new(output_dir))?;

    match importer.import(&args.place, &args.flag).await? {
        ImportOutcome::Imported(flag) => {
            info!(
                "Imported {} ({} bytes) and {}",
                flag.flag_path, flag.svg_bytes, flag.licence_path
            );
            Ok(0)
        }
        ImportOutcome::Rejected { url } => {
            error!("URL must be of the form https://commons.wikimedia.org/wiki/File:XXXXX.svg");
            info!("Rejected URL: {}", url);
            Ok(EXIT_REJECTED)
        }
    }
}
