use super::plantuml_encoding;
use crate::application::dto::ImageFormat;
use crate::ports::outbound::DiagramRenderer;
use crate::shared::error::ArchVizError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Public PlantUML server
pub const DEFAULT_BASE_URL: &str = "https://www.plantuml.com/plantuml";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// PlantUmlServerRenderer adapter for a PlantUML rendering server
///
/// This adapter implements the DiagramRenderer port. The diagram text is
/// encoded into the request path; the server answers with the image.
///
/// # Async Support
/// Uses async reqwest client with a request timeout and a bounded number of
/// attempts, waiting a little longer before each retry.
pub struct PlantUmlServerRenderer {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl PlantUmlServerRenderer {
    /// Creates a renderer for the server at `base_url`
    pub fn new(base_url: &str, timeout: Duration, max_retries: u32) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("archviz/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries: max_retries.max(1),
        })
    }

    /// Renderer for the public server with default settings
    pub fn public() -> Result<Self> {
        Self::new(
            DEFAULT_BASE_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            DEFAULT_MAX_RETRIES,
        )
    }

    async fn fetch_with_retry(&self, url: &str) -> Result<Vec<u8>> {
        let mut last_error = String::new();

        for attempt in 1..=self.max_retries {
            match self.fetch(url).await {
                Ok(image) => return Ok(image),
                Err(e) => {
                    log::debug!("Render attempt {} of {} failed: {:#}", attempt, self.max_retries, e);
                    last_error = format!("{:#}", e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(ArchVizError::RenderServiceError {
            url: url.to_string(),
            details: last_error,
        }
        .into())
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Rendering server returned status code {}", response.status());
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl DiagramRenderer for PlantUmlServerRenderer {
    fn url_for(&self, source: &str, format: ImageFormat) -> Result<String> {
        let token = plantuml_encoding::encode(source)?;
        Ok(format!("{}/{}/{}", self.base_url, format.as_str(), token))
    }

    async fn render(&self, source: &str, format: ImageFormat) -> Result<Vec<u8>> {
        let url = self.url_for(source, format)?;
        log::info!("Requesting {} diagram from {}", format, self.base_url);
        self.fetch_with_retry(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_creation() {
        assert!(PlantUmlServerRenderer::public().is_ok());
    }

    #[test]
    fn test_url_layout() {
        let renderer =
            PlantUmlServerRenderer::new("http://localhost:8080/plantuml/", Duration::from_secs(1), 1)
                .unwrap();
        let url = renderer.url_for("@startuml\n@enduml", ImageFormat::Svg).unwrap();
        let token = plantuml_encoding::encode("@startuml\n@enduml").unwrap();
        assert_eq!(url, format!("http://localhost:8080/plantuml/svg/{}", token));
    }

    #[test]
    fn test_default_base_url() {
        let renderer = PlantUmlServerRenderer::public().unwrap();
        let url = renderer.url_for("x", ImageFormat::Png).unwrap();
        assert!(url.starts_with("https://www.plantuml.com/plantuml/png/"));
    }

    #[tokio::test]
    async fn test_unreachable_server_reports_render_error() {
        let renderer =
            PlantUmlServerRenderer::new("http://127.0.0.1:9", Duration::from_secs(1), 1).unwrap();
        let err = renderer
            .render("@startuml\n@enduml", ImageFormat::Png)
            .await
            .unwrap_err();
        let render_err = err.downcast_ref::<ArchVizError>();
        assert!(matches!(
            render_err,
            Some(ArchVizError::RenderServiceError { .. })
        ));
    }
}
