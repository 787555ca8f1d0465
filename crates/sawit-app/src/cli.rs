use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sawit: the portfolio chat assistant, in your terminal.
#[derive(Parser, Debug)]
#[command(name = "sawit", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `sawit=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Page the visitor is on (Home, Profile, Skills, Projects, Contact).
    #[arg(long, global = true)]
    pub page: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Chat interactively (default).
    Chat,
    /// Clear the stored conversation and start over.
    Reset,
    /// Write the chat window contents as an HTML fragment.
    Export {
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the stored chat window contents.
    Show,
}

pub fn parse() -> Args {
    Args::parse()
}
