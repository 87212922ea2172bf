//! bin2js CLI - Embed binary files into a JavaScript asset bundle

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::bundle;
use env_logger::Env;
use std::path::PathBuf;

/// Exit status for a run without input files
const USAGE_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(name = "bin2js")]
#[command(about = "Embed binary files into js/assets.js as escaped string literals", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Files to embed; each is registered under the path exactly as given,
    /// including paths that start with `-`
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    files: Vec<PathBuf>,
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bin2js".to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        println!("Usage: {} <filenames...>", program_name());
        std::process::exit(USAGE_EXIT_CODE);
    }

    bundle::run(&cli.files)
}
