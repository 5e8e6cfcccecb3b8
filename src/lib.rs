pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::FetchConfig;

pub use adapters::LocalStorage;
pub use crate::core::{fetcher::Fetcher, report::report, DownloadSummary, FetchOutcome, SampleFile};
pub use utils::error::{FetchError, Result};
