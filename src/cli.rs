use clap::Parser;
use std::path::PathBuf;

/// Fail CI when open Dependabot alerts exceed per-severity age thresholds
#[derive(Parser, Debug)]
#[command(name = "alert-gate")]
#[command(version)]
#[command(
    about = "Fail CI when open Dependabot alerts exceed per-severity age thresholds",
    long_about = None
)]
pub struct Args {
    /// Repository in owner/name form (defaults to $GITHUB_REPOSITORY)
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Read alerts from a JSON file instead of the GitHub API
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Max age in days for critical alerts
    #[arg(long, value_name = "DAYS")]
    pub critical: Option<u32>,

    /// Max age in days for high alerts
    #[arg(long, value_name = "DAYS")]
    pub high: Option<u32>,

    /// Max age in days for medium alerts
    #[arg(long, value_name = "DAYS")]
    pub medium: Option<u32>,

    /// Max age in days for low alerts
    #[arg(long, value_name = "DAYS")]
    pub low: Option<u32>,

    /// Report violations without failing the gate
    #[arg(long)]
    pub report_only: bool,

    /// Write the Markdown summary to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip posting/updating the PR comment
    #[arg(long)]
    pub no_comment: bool,

    /// Revoke the installation token after the run
    #[arg(long)]
    pub revoke_token: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
