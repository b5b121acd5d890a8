use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no alerts exceeded their age threshold, or report-only mode
    Success = 0,
    /// One or more alerts remained open longer than the configured threshold
    ViolationsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, configuration error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ViolationsDetected => write!(f, "Violations Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the alert gate.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    Configuration { message: String, hint: String },

    #[error("Failed to fetch Dependabot alerts for {repo}\nDetails: {details}\n\n💡 Hint: {hint}")]
    AlertFetch {
        repo: String,
        details: String,
        hint: String,
    },

    #[error("Failed to read alert file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and contains a JSON array of alerts")]
    AlertFileRead { path: PathBuf, details: String },

    #[error("Failed to post comment to pull request #{pr_number}\nDetails: {details}")]
    CommentPost { pr_number: u64, details: String },

    #[error("Failed to revoke installation token (HTTP status {status})")]
    TokenRevoke { status: u16 },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
