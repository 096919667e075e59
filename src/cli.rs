use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wiki-flag")]
#[command(about = "Import flag images and their licences from Wikimedia Commons")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root directory holding one directory per place
    #[arg(short, long, global = true, default_value = ".")]
    pub output: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a flag from wikimedia
    Import(ImportArgs),
}

#[derive(Args)]
pub struct ImportArgs {
    /// Name of place (in English)
    #[arg(value_name = "PLACE")]
    pub place: String,

    /// The URL fragment after "https://commons.wikimedia.org/wiki/File:"
    #[arg(value_name = "FLAG")]
    pub flag: String,
}
