//! Storage Adapters
//!
//! Implementations of the `DesignStore` port.
//!
//! - **InMemoryDesignStore** - Sessions held for the life of the process

mod in_memory_design_store;

pub use in_memory_design_store::InMemoryDesignStore;
