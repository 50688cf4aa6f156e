use async_trait::async_trait;
use url::Url;

/// One HTTP round trip that yields a decoded body.
///
/// Implementations perform exactly one request per call and classify
/// non-success responses into their own error type. They never retry.
#[async_trait]
pub trait Fetchable {
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn fetch(&self, url: &Url) -> Result<Self::Output, Self::Error>;
}
