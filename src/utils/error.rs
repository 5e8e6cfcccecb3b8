use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server answered {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Reported to the operator, the run still succeeds.
    Low,
    /// Bad input; nothing was attempted.
    High,
    /// The environment is broken.
    Critical,
}

impl FetchError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FetchError::HttpClient(_)
            | FetchError::Request(_)
            | FetchError::Status { .. }
            | FetchError::Write { .. } => ErrorSeverity::Low,
            FetchError::InvalidConfig { .. } => ErrorSeverity::High,
            FetchError::DirectoryCreation { .. } => ErrorSeverity::Critical,
        }
    }

    /// Download failures are swallowed by the fetcher; everything else aborts the run.
    pub fn is_download_failure(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn exit_code(&self) -> u8 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Critical => 1,
            ErrorSeverity::High => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::DirectoryCreation { path, .. } => {
                format!("Could not create directory {}", path.display())
            }
            FetchError::HttpClient(_) => "Could not initialise the HTTP client".to_string(),
            FetchError::Request(e) if e.is_redirect() => "Too many redirects".to_string(),
            FetchError::Request(e) if e.is_timeout() => "The request timed out".to_string(),
            FetchError::Request(_) => "Could not reach the download server".to_string(),
            FetchError::Status { status, .. } => format!("Download rejected with HTTP {}", status),
            FetchError::Write { path, .. } => format!("Could not write {}", path.display()),
            FetchError::InvalidConfig { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::DirectoryCreation { .. } => {
                "Check permissions and free space in the working directory"
            }
            FetchError::Request(_) | FetchError::Status { .. } => {
                "Check the source URL and your network connection, or place the file manually"
            }
            FetchError::Write { .. } => "Check free disk space and file permissions",
            FetchError::HttpClient(_) => "Check the TLS setup of this machine",
            FetchError::InvalidConfig { .. } => "Fix the command line arguments and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
