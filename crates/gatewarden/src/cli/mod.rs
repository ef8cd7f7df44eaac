//! command-line interface for gatewarden.

pub mod serve;

use clap::{Parser, Subcommand};

/// gatewarden - authorization front-end core
#[derive(Parser, Debug)]
#[command(name = "gatewarden", version, about)]
pub struct Cli {
    /// the subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// run the http server
    Serve(serve::ServeCommand),
}
