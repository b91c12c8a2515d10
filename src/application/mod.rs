/// Application layer - Use cases, the inventory store and DTOs
///
/// This layer orchestrates the pure inventory services and reaches
/// infrastructure only through ports.
pub mod dto;
pub mod factories;
pub mod inventory_store;
pub mod read_models;
pub mod use_cases;

pub use inventory_store::{InventoryStore, Mutation, PersistenceMode};
