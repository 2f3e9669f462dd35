mod cli;
mod config;
mod convert;
mod error;
mod load;
mod mappers;
mod report;
mod resolve;
mod types;

use crate::error::ConvertError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_directive = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, ConvertError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Missing positionals print usage and exit clean; only real failures
    // reach the error path below.
    let (Some(input), Some(output)) = (cli.input.as_deref(), cli.output.as_deref()) else {
        println!("usage: trivy-sonar <input.json> <output.json>");
        return Ok(exit_code::SUCCESS);
    };

    let root = std::env::current_dir()?;
    let loaded = config::load_config(&root)?;
    let options = convert::ConvertOptions::resolve(loaded.as_ref());
    let summary = convert::convert(input, output, &root, &options)?;

    println!(
        "convert complete: wrote {} issue(s) to {} (fallback anchor {})",
        summary.issue_count,
        output.display(),
        summary.anchor
    );
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
