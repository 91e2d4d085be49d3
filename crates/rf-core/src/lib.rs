//! rusty-forum/crates/rf-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Rusty-Forum:
//! validating entities, repository ports, and the use cases built on them.

pub mod entities;
pub mod error;
pub mod models;
pub mod traits;
pub mod use_cases;

// Re-exporting for easier access in other crates
pub use entities::*;
pub use error::*;
pub use models::*;
pub use traits::*;
pub use use_cases::*;
