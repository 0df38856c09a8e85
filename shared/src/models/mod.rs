//! Data models
//!
//! Mirrors of the consensus API resources. All IDs are `i64`; timestamps go
//! through [`crate::util::timestamp`].

pub mod invitation;
pub mod member;
pub mod opinion;
pub mod project;
pub mod result;
pub mod user;

// Re-exports
pub use invitation::*;
pub use member::*;
pub use opinion::*;
pub use project::*;
pub use result::*;
pub use user::*;
