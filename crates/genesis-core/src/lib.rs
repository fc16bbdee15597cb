//! Genesis Core - lifecycle, classification and response rendering
//!
//! This crate holds everything the native bridge decides:
//! - Core lifecycle (CoreState, ConsciousnessLevel, version)
//! - Request classification (ordered first-match rules)
//! - Response documents (the JSON wire contract)
//! - Memory optimizer and hook enabler collaborators
//! - Diagnostics sink abstraction and error types
//!
//! Nothing here is `unsafe`; the C ABI and JNI layers live in `genesis-ffi`.

pub mod classifier;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod hooks;
pub mod optimizer;
pub mod response;
pub mod state;

pub use classifier::*;
pub use config::*;
pub use diagnostics::*;
pub use engine::*;
pub use error::*;
pub use hooks::*;
pub use optimizer::*;
pub use response::*;
pub use state::*;
