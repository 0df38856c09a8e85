//! Shared types for the consensus client
//!
//! Request/response DTOs mirroring the consensus API server one-to-one.
//! The client performs no transformation beyond decoding these.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
