// src/commands/completions.rs
//! Shell completion script generation

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

use crate::cli::Cli;

/// Generate completions for the requested shell on stdout
pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "larder", &mut io::stdout());
    Ok(())
}
