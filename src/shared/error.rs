use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Every failure, whether a rejected command line or an aborted report,
/// maps to the same non-zero status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report printed (or help/version shown)
    Success = 0,
    /// Validation, authentication, configuration or fetch failure
    Failure = 1,
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
            ExitCode::Failure => write!(f, "Failure (1)"),
        }
    }
}

/// Application-specific errors for update reporting.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Each variant corresponds to one boundary where a run can be aborted.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The offline token could not be exchanged for an access token.
    /// `body` carries the raw response body returned by the SSO endpoint.
    #[error("Failed to obtain an access token: {details}\n{body}\n\n💡 Hint: Offline tokens expire after 30 days. Generate a new one at https://access.redhat.com/management/api")]
    Authentication { details: String, body: String },

    /// Missing or conflicting command-line input
    #[error("{message}")]
    Validation { message: String },

    /// A device listing, device detail or errata request failed
    #[error("Failed to fetch {resource}\nDetails: {details}")]
    Fetch { resource: String, details: String },

    #[error("Invalid config file: {path}\nDetails: {details}\n\n💡 Hint: Check the keys auth_url, api_url and cumulative")]
    Config { path: PathBuf, details: String },
}

impl ReportError {
    pub fn validation(message: impl Into<String>) -> Self {
        ReportError::Validation {
            message: message.into(),
        }
    }

    pub fn fetch(resource: impl Into<String>, details: impl fmt::Display) -> Self {
        ReportError::Fetch {
            resource: resource.into(),
            details: details.to_string(),
        }
    }
}
