mod catalog_cmds;
mod config;
mod generate_cmd;
mod serve_cmd;
#[cfg(test)]
mod test_util;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use config::ClipplanConfig;
use generate_cmd::GenerateOptions;

#[derive(Parser)]
#[command(name = "clipplan", about = "Short-form video content planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a clipplan config file
    Init {
        /// Address the server binds to
        #[arg(long, default_value = config::DEFAULT_BIND)]
        bind: String,
        /// Port the server listens on
        #[arg(long, default_value_t = config::DEFAULT_PORT)]
        port: u16,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Serve the planner page and the generate API
    Serve {
        /// Bind address (overrides CLIPPLAN_BIND and the config file)
        #[arg(long)]
        bind: Option<String>,
        /// Port (overrides CLIPPLAN_PORT and the config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate a plan and print it as JSON
    Generate {
        /// Content niche (e.g. fitness, tech, food)
        #[arg(long)]
        niche: String,
        /// Trending keyword to work into the plan
        #[arg(long)]
        trend: Option<String>,
        /// Goal of the post (e.g. engagement, follower)
        #[arg(long)]
        goal: Option<String>,
        /// Tone: dinamico, ironico, motivazionale, educativo
        #[arg(long)]
        tone: Option<String>,
        /// Write the plan to this file
        #[arg(long, conflicts_with = "export")]
        output: Option<PathBuf>,
        /// Write the plan to tiktok-plan-<millis>.json in the current directory
        #[arg(long)]
        export: bool,
        /// Print only the caption and hashtags
        #[arg(long, conflicts_with_all = ["output", "export"])]
        share: bool,
    },
    /// List tone profiles
    Tones,
    /// List niche categories and their hashtags
    Niches,
}

/// Execute the `clipplan init` command: write config file.
fn cmd_init(bind: &str, port: u16, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        server: config::ServerSection {
            bind: bind.to_string(),
            port,
        },
        site: config::SiteSection::default(),
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  server.bind = {bind}");
    println!("  server.port = {port}");
    println!();
    println!("Next: run `clipplan serve` and open http://{bind}:{port}/");

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { bind, port, force } => {
            cmd_init(&bind, port, force)?;
        }
        Commands::Serve { bind, port } => {
            let resolved = ClipplanConfig::resolve(bind.as_deref(), port)?;
            serve_cmd::run_serve(&resolved).await?;
        }
        Commands::Generate {
            niche,
            trend,
            goal,
            tone,
            output,
            export,
            share,
        } => {
            generate_cmd::run_generate(&GenerateOptions {
                niche,
                trend,
                goal,
                tone,
                output,
                export,
                share,
            })?;
        }
        Commands::Tones => {
            catalog_cmds::run_tones(clipplan_core::catalog(), &mut std::io::stdout().lock())?;
        }
        Commands::Niches => {
            catalog_cmds::run_niches(clipplan_core::catalog(), &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
