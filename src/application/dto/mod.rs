/// Data Transfer Objects for application layer
///
/// Small value types shared between the CLI, the use cases and the
/// outbound adapters.
mod diagram_kind;
mod image_format;

pub use diagram_kind::DiagramKind;
pub use image_format::ImageFormat;
