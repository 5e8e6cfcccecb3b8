use crate::utils::error::Result;
use std::future::Future;
use std::path::Path;

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn file_name(&self) -> &str;
}

pub trait Storage: Send + Sync {
    type Partial: PartialWrite;

    /// Creates `path` and any missing parents. Succeeds if it already exists.
    fn ensure_dir(&self, path: &Path) -> impl Future<Output = Result<()>> + Send;

    /// Opens an in-progress write that replaces `destination` only on commit.
    fn begin(&self, destination: &Path) -> impl Future<Output = Result<Self::Partial>> + Send;
}

pub trait PartialWrite: Send {
    fn write_chunk(&mut self, chunk: &[u8]) -> impl Future<Output = Result<()>> + Send;

    /// Moves the written bytes into place and returns how many there were.
    fn commit(self) -> impl Future<Output = Result<u64>> + Send;

    fn discard(self) -> impl Future<Output = ()> + Send;
}
