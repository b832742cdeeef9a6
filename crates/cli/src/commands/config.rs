// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `herald config` - print the effective configuration

use crate::config::AppConfig;
use crate::output::OutputFormat;
use anyhow::Result;

pub fn handle(config: &AppConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", toml::to_string(config)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}
