//! # healthdesk-contracts
//!
//! Shared types, wire formats, and errors for the HealthDesk workspace.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions, field parsing, and error types.

pub mod date;
pub mod error;
pub mod metrics;
