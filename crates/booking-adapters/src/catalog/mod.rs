//! `CityCatalog` adapters.

pub mod file;
pub mod memory;

pub use file::FileCatalog;
pub use memory::InMemoryCatalog;
