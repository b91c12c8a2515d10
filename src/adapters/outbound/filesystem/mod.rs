/// Filesystem adapters: key-value persistence and output files
mod file_writer;
mod json_file_store;
mod memory_store;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
