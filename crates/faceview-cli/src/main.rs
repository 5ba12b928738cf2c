use anyhow::Result;
use clap::{Parser, Subcommand};
use faceview_store::RecordStore;
use std::path::PathBuf;

mod config;
mod enroll;
mod watch;

use config::Config;

#[derive(Parser)]
#[command(
    name = "faceview",
    about = "Faceview — identity enrollment and live stream recognition"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enroll a new identity: collect profile fields and persist them
    Enroll,
    /// Resolve identities from a live embedding stream, frame by frame
    Watch {
        /// JSON Lines embedding stream; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Show the stored profile details for an identity
    Show {
        /// Display name of the enrolled identity
        name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Enroll => enroll::run(&config),
        Commands::Watch { input } => watch::run(&config, input.as_deref()),
        Commands::Show { name } => show(&config, &name),
    }
}

fn show(config: &Config, name: &str) -> Result<()> {
    let store = RecordStore::open(config.details_dir.clone(), config.image_dir.clone());
    match store.load_record(name)? {
        Some(record) => {
            let details = record.into_details();
            println!("Details for {name}");
            for (label, value) in details.fields() {
                println!("{label}: {value}");
            }
        }
        None => println!("Details file not found for {name}"),
    }
    Ok(())
}
