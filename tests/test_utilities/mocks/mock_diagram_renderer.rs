use archviz::prelude::*;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock DiagramRenderer that echoes the diagram text as the image
#[derive(Default, Clone)]
pub struct MockDiagramRenderer {
    pub calls: Arc<AtomicUsize>,
    pub should_fail: bool,
}

impl MockDiagramRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DiagramRenderer for MockDiagramRenderer {
    fn url_for(&self, source: &str, format: ImageFormat) -> Result<String> {
        Ok(format!("http://render.test/{}/{}", format, source.len()))
    }

    async fn render(&self, source: &str, format: ImageFormat) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock rendering service failure");
        }
        Ok(format!("{}:{}", format, source).into_bytes())
    }
}
