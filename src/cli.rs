use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "trivy-sonar",
    version,
    about = "Convert Trivy scan reports into SonarQube generic issue imports"
)]
pub struct Cli {
    /// Trivy JSON report to convert
    pub input: Option<PathBuf>,

    /// Destination for the SonarQube issue import file
    pub output: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
