use crate::core::{DownloadSummary, FetchOutcome, PartialWrite, Result, SampleFile, Storage};
use crate::domain::model::PDF_MAGIC;
use crate::utils::error::FetchError;
use reqwest::Client;
use std::path::Path;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Makes sure the sample file is present: directory first, then one GET.
pub struct Fetcher<S: Storage> {
    storage: S,
    client: Option<Client>,
}

impl<S: Storage> Fetcher<S> {
    /// The HTTP client is built on the first download, after the directory exists.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            client: None,
        }
    }

    pub fn with_client(storage: S, client: Client) -> Self {
        Self {
            storage,
            client: Some(client),
        }
    }

    fn client(&self) -> Result<Client> {
        match &self.client {
            Some(client) => Ok(client.clone()),
            None => Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .map_err(FetchError::HttpClient),
        }
    }

    pub async fn ensure_directory(&self, path: &Path) -> Result<()> {
        tracing::debug!("Ensuring directory {} exists", path.display());
        self.storage.ensure_dir(path).await
    }

    /// GETs `url` and streams a 2xx body over `destination`.
    ///
    /// Nothing is touched on disk unless the server answers with a success status,
    /// and a body that fails mid-stream leaves the previous destination in place.
    pub async fn download(&self, url: &str, destination: &Path) -> Result<DownloadSummary> {
        tracing::info!("Downloading {} -> {}", url, destination.display());

        let mut response = self.client()?.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {} (final url: {})", status, response.url());

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let mut partial = self.storage.begin(destination).await?;
        let mut head = Vec::with_capacity(PDF_MAGIC.len());

        let streamed = async {
            while let Some(chunk) = response.chunk().await? {
                if head.len() < PDF_MAGIC.len() {
                    let take = (PDF_MAGIC.len() - head.len()).min(chunk.len());
                    head.extend_from_slice(&chunk[..take]);
                }
                partial.write_chunk(&chunk).await?;
            }
            Ok::<(), FetchError>(())
        }
        .await;

        if let Err(e) = streamed {
            partial.discard().await;
            return Err(e);
        }

        let bytes_written = partial.commit().await?;
        let looks_like_pdf = head.as_slice() == PDF_MAGIC;
        if !looks_like_pdf {
            tracing::warn!(
                "Downloaded body does not start with a PDF header ({} bytes)",
                bytes_written
            );
        }

        tracing::info!("Wrote {} bytes to {}", bytes_written, destination.display());

        Ok(DownloadSummary {
            bytes_written,
            looks_like_pdf,
        })
    }

    /// Only a directory failure is returned as an error; download failures become
    /// [`FetchOutcome::ManualPlacementRequired`].
    pub async fn run(&self, sample: &SampleFile) -> Result<FetchOutcome> {
        self.ensure_directory(sample.directory()).await?;

        match self.download(&sample.source_url, &sample.destination).await {
            Ok(summary) => Ok(FetchOutcome::Downloaded(summary)),
            Err(e) if e.is_download_failure() => {
                tracing::warn!("Download failed: {}", e);
                Ok(FetchOutcome::ManualPlacementRequired(e))
            }
            Err(e) => Err(e),
        }
    }
}
