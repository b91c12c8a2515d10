/// Mock implementations for testing
mod mock_diagram_renderer;
mod mock_key_value_store;
mod mock_notifier;

pub use mock_diagram_renderer::MockDiagramRenderer;
pub use mock_key_value_store::MockKeyValueStore;
pub use mock_notifier::MockNotifier;
