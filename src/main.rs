use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod page;
mod telemetry;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The path to the configuration file (defaults to folio.yaml if present)
    #[arg(short, long, global = true)]
    config_file: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    command: FolioCommand,
}

#[derive(Parser)]
struct RenderArgs {
    /// Write the page to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct ServeArgs {
    /// The address to bind to
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// The port to bind to
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Open the page in the default browser
    #[arg(short, long, default_value = "false")]
    open: bool,
}

#[derive(Subcommand)]
enum FolioCommand {
    /// Render the page once
    Render(RenderArgs),

    /// Serve the page on a local port, re-rendering on every request
    Serve(ServeArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let config = config::Config::load(args.config_file.as_deref())?;
    telemetry::init(&config.logging)?;

    match args.command {
        FolioCommand::Render(args) => {
            commands::render::run(&args, &config)?;
        }
        FolioCommand::Serve(args) => {
            commands::serve::run(&args, &config).await?;
        }
    }

    Ok(())
}
