use crate::core::ConfigProvider;
use crate::domain::model::{DEFAULT_FILE_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_URL};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sample-fetch")]
#[command(about = "Download the sample PDF used as extraction test input")]
pub struct FetchConfig {
    #[arg(long, env = "SAMPLE_PDF_URL", default_value = DEFAULT_SOURCE_URL)]
    pub url: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    pub file_name: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for FetchConfig {
    fn source_url(&self) -> &str {
        &self.url
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Validate for FetchConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_file_name("file_name", &self.file_name)?;
        Ok(())
    }
}
