//! Read models for CQRS-lite pattern
//!
//! View-optimized structs handed to the formatters, so formatters never
//! touch the store or the filter state.

pub mod diagram_model;

pub use diagram_model::DiagramModel;
