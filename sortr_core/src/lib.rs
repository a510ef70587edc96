//! # Introduction
//!
//! Reads an array of integers from the terminal, prints it, sorts it in
//! ascending order with a quadratic comparison-exchange pass, and prints the
//! result. The sorters live in [`sorters`], the interactive flow in
//! [`session`].

pub mod session;
pub mod sorters;

use std::io;

use clap::{Args, Subcommand};

/// Argument builder for the `sort` subcommand. Run `sortr sort` to see what
/// options are available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SortArgs {
    #[command(subcommand)]
    command: SortCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SortCommands {
    /// Read an array from the terminal, print it, sort it, print it again.
    Run,

    /// Compare the two sort formulations over random arrays of several sizes.
    Bench,
}

impl SortArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            SortCommands::Run => {
                let stdin = io::stdin();
                let mut stdout = io::stdout();
                session::run(&mut stdin.lock(), &mut stdout)?;
            }
            SortCommands::Bench => sorters::benchmark::run_benchmark(),
        }
        Ok(())
    }
}
