//! # strand-store
//!
//! Storage backends for strand records.
//!
//! [`MemoryStore`] keeps records in a process-local map. It is owned by the
//! caller and injected where needed; nothing here is global.

pub mod memory;

pub use memory::MemoryStore;
pub use strand_core::StringRepository;
