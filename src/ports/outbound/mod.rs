/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (key-value storage, the diagram
/// rendering service, the console).
pub mod diagram_renderer;
pub mod formatter;
pub mod key_value_store;
pub mod notifier;
pub mod output_presenter;

pub use diagram_renderer::DiagramRenderer;
pub use formatter::DiagramFormatter;
pub use key_value_store::KeyValueStore;
pub use notifier::{Notification, NotificationLevel, Notifier};
pub use output_presenter::OutputPresenter;
