pub mod fetcher;
pub mod report;

pub use crate::domain::model::{DownloadSummary, FetchOutcome, SampleFile};
pub use crate::domain::ports::{ConfigProvider, PartialWrite, Storage};
pub use crate::utils::error::Result;
