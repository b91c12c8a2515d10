/// Type alias for Result with anyhow::Error as the error type.
/// Typed errors (`ArchVizError`, `InventoryError`) convert into it with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
