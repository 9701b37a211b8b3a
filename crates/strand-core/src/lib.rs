//! # strand-core
//!
//! Core types, traits, and abstractions for the strand string analyzer.
//!
//! This crate provides the string analyzer, the stored record model, the
//! structured filter model and the repository trait that storage backends
//! implement. It performs no I/O.

pub mod analysis;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use analysis::{analyze, content_hash};
pub use error::{Error, Result};
pub use filter::{apply, matches, FilterSet};
pub use models::*;
pub use traits::*;
