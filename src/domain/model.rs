use crate::domain::ports::ConfigProvider;
use std::path::{Path, PathBuf};

/// Placeholder test resource; override it with `--url` or `SAMPLE_PDF_URL`.
pub const DEFAULT_SOURCE_URL: &str =
    "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf";
pub const DEFAULT_OUTPUT_DIR: &str = "inputs";
pub const DEFAULT_FILE_NAME: &str = "bray_sample.pdf";

pub const PDF_MAGIC: &[u8] = b"%PDF-";

/// The artifact the fetcher makes sure is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFile {
    pub source_url: String,
    pub destination: PathBuf,
}

impl SampleFile {
    pub fn new(source_url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            destination: destination.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(
            config.source_url(),
            Path::new(config.output_dir()).join(config.file_name()),
        )
    }

    /// Directory that must exist before the destination is written.
    pub fn directory(&self) -> &Path {
        match self.destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn exists(&self) -> bool {
        self.destination.is_file()
    }
}

impl Default for SampleFile {
    fn default() -> Self {
        Self::new(
            DEFAULT_SOURCE_URL,
            Path::new(DEFAULT_OUTPUT_DIR).join(DEFAULT_FILE_NAME),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadSummary {
    pub bytes_written: u64,
    pub looks_like_pdf: bool,
}

#[derive(Debug)]
pub enum FetchOutcome {
    Downloaded(DownloadSummary),
    /// The download failed and the operator has to place the file by hand.
    ManualPlacementRequired(crate::utils::error::FetchError),
}

impl FetchOutcome {
    pub fn is_downloaded(&self) -> bool {
        matches!(self, FetchOutcome::Downloaded(_))
    }
}
