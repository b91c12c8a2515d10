/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the CLI drives the use cases
/// directly, and the use cases reach storage, rendering and the terminal
/// through the traits below.
pub mod outbound;
