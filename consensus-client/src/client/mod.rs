//! Client module - endpoint catalog.
//!
//! `ConsensusClient` exposes one async method per backend operation. Each is
//! a thin composition: build a descriptor, dispatch it, interpret the answer.

mod auth;
mod builder;
mod common;
mod invitations;
mod members;
mod opinions;
mod projects;
mod results;
mod users;

pub use builder::ClientBuilder;
pub use common::ConsensusClient;
pub use users::PhotoUpload;
