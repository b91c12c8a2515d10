use crate::application::dto::ImageFormat;
use crate::ports::outbound::DiagramRenderer;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Diagram text is deterministic, so (format, text) identifies an image
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    format: ImageFormat,
    source: String,
}

/// CachingDiagramRenderer wraps a DiagramRenderer and adds in-memory caching.
///
/// Only successful renders are cached; a failed request is retried on the
/// next call. The cache is thread-safe and suitable for concurrent access.
pub struct CachingDiagramRenderer<R: DiagramRenderer> {
    inner: R,
    cache: Arc<DashMap<CacheKey, Vec<u8>>>,
}

impl<R: DiagramRenderer> CachingDiagramRenderer<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: DiagramRenderer> DiagramRenderer for CachingDiagramRenderer<R> {
    fn url_for(&self, source: &str, format: ImageFormat) -> Result<String> {
        self.inner.url_for(source, format)
    }

    async fn render(&self, source: &str, format: ImageFormat) -> Result<Vec<u8>> {
        let key = CacheKey {
            format,
            source: source.to_string(),
        };

        if let Some(cached) = self.cache.get(&key) {
            log::debug!("Render cache hit ({}, {} bytes of source)", format, source.len());
            return Ok(cached.clone());
        }

        log::debug!("Render cache miss ({}, {} bytes of source)", format, source.len());
        let image = self.inner.render(source, format).await?;
        self.cache.insert(key, image.clone());

        Ok(image)
    }
}
