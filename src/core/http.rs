//! HTTP collaborator abstractions used to retrieve quotes

use anyhow::Result;
use async_trait::async_trait;

/// A response whose underlying resources must be released with [`close`].
///
/// [`close`]: HttpResponse::close
#[async_trait]
pub trait HttpResponse: Send {
    fn status(&self) -> u16;

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// Consumes the body. A second call is an error.
    async fn text(&mut self) -> Result<String>;

    async fn close(&mut self) -> Result<()>;
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<Box<dyn HttpResponse>>;
}
