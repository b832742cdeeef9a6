// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! herald - in-process event bus demos

mod commands;
mod config;
mod logging;
mod output;
mod users;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{async_publish, burst, cancel, fanout, partial, DemoEnv};
use config::{AppConfig, LogFormat};
use herald_core::Context;
use output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "herald",
    version,
    about = "Herald - topic-based publish/subscribe scenarios"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter directive (overrides `[log] level`)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log line format (overrides `[log] format`)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Result format on stdout
    #[arg(long, global = true, value_enum, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fan one topic out to several services
    Fanout(fanout::FanoutArgs),
    /// Publish without waiting for a slow consumer
    Async(async_publish::AsyncArgs),
    /// Publish with a context that expires first
    Cancel(cancel::CancelArgs),
    /// Cancel a publish midway through fan-out
    Partial,
    /// Publish asynchronously into a small undrained queue
    Burst(burst::BurstArgs),
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    if let Some(format) = cli.log_format {
        config.log.format = format;
    }

    // Held until exit so buffered log lines are flushed
    let _guard = logging::setup_logging(&config.log)?;

    if let Commands::Config = cli.command {
        return commands::config::handle(&config, cli.output);
    }

    let root = Context::background();
    {
        let root = root.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupted, cancelling in-flight publishes");
                root.cancel();
            }
        });
    }

    let env = DemoEnv { config, root };
    match cli.command {
        Commands::Fanout(args) => output::print(&fanout::handle(args, &env).await?, cli.output),
        Commands::Async(args) => {
            output::print(&async_publish::handle(args, &env).await?, cli.output)
        }
        Commands::Cancel(args) => output::print(&cancel::handle(args, &env).await?, cli.output),
        Commands::Partial => output::print(&partial::handle(&env).await?, cli.output),
        Commands::Burst(args) => output::print(&burst::handle(args, &env).await?, cli.output),
        Commands::Config => {}
    }

    Ok(())
}
