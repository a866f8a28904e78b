use std::path::PathBuf;

use clap::Parser;

/// unobot: ask questions about the UNO rules, answered from the manual.
#[derive(Parser, Debug)]
#[command(name = "unobot", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Manual PDF to answer from.
    #[arg(short = 'm', long)]
    pub manual: Option<PathBuf>,

    /// Model used for answers (overrides the config).
    #[arg(long)]
    pub model: Option<String>,

    /// Log level override (debug, info, warn, error or a full filter).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Wait for complete answers instead of streaming them.
    #[arg(long)]
    pub no_stream: bool,

    /// Answer a single question and exit.
    #[arg(short = 'a', long)]
    pub ask: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
