use crate::application::dto::ImageFormat;
use crate::shared::Result;
use async_trait::async_trait;

/// DiagramRenderer port for the external diagram rendering service
///
/// # Async Support
/// Rendering is a network round trip. Implementations must be
/// `Send + Sync` so decorators (caching) can share them.
#[async_trait]
pub trait DiagramRenderer: Send + Sync {
    /// Builds the service URL that renders `source` as `format`
    ///
    /// # Errors
    /// Returns an error if the source cannot be encoded
    fn url_for(&self, source: &str, format: ImageFormat) -> Result<String>;

    /// Renders `source` and returns the image bytes
    ///
    /// # Arguments
    /// * `source` - Diagram source text
    /// * `format` - Requested image format
    ///
    /// # Errors
    /// Returns an error if:
    /// - The service cannot be reached
    /// - The service answers with an error status code
    async fn render(&self, source: &str, format: ImageFormat) -> Result<Vec<u8>>;
}
