/// Network adapters for the diagram rendering service
mod caching_diagram_renderer;
mod plantuml_encoding;
mod plantuml_server_renderer;

pub use caching_diagram_renderer::CachingDiagramRenderer;
pub use plantuml_encoding::encode as encode_plantuml;
pub use plantuml_server_renderer::{
    PlantUmlServerRenderer, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
};
