//! EmbryoDoc CLI - builds the EmbryoDoc App landing page.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use embryodoc_static::{Preset, LOCAL_PREVIEW_DIR};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod pages;
mod site;

#[derive(Parser)]
#[command(name = "embryodoc")]
#[command(about = "Builds the EmbryoDoc App landing page as a static site")]
#[command(version)]
pub struct Cli {
    /// Defaults to `build` with the configured preset
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to embryodoc.toml config file
    #[arg(short, long, default_value = "embryodoc.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site
    Build {
        /// Output preset: local-preview (./docs) or deployed (absolute directory)
        #[arg(long)]
        preset: Option<Preset>,

        /// Output directory, overrides the preset
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Absolute output directory for the deployed preset
        #[arg(long, env = "EMBRYODOC_DEPLOY_DIR")]
        deploy_dir: Option<PathBuf>,

        /// Skip minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Preview a built site
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = LOCAL_PREVIEW_DIR)]
        dir: PathBuf,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        None => {
            commands::build::run(&cli.config, Default::default()).await?;
        }
        Some(Commands::Build {
            preset,
            output,
            deploy_dir,
            no_minify,
        }) => {
            let args = commands::build::BuildArgs {
                preset,
                output,
                deploy_dir,
                minify: if no_minify { Some(false) } else { None },
            };
            commands::build::run(&cli.config, args).await?;
        }
        Some(Commands::Serve { port, dir, no_open }) => {
            commands::serve::run(port, dir, !no_open).await?;
        }
    }

    Ok(())
}
