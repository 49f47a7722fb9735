//! `seglock config`: print the effective configuration

use std::process::ExitCode;

use anyhow::{Context, Result};
use seglock_core::Config;

pub fn render(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration")
}

pub fn run(config: &Config) -> Result<ExitCode> {
    print!("{}", render(config)?);
    Ok(ExitCode::SUCCESS)
}
