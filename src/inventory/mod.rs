//! Inventory core - typed records and the pure derivations over them
//!
//! Nothing in this module performs I/O; the same inputs always produce the
//! same outputs.
pub mod domain;
pub mod services;
