//! Repository implementations module.
//!
//! This module contains implementations of the repository traits:
//! - `local`: In-memory implementation for unit testing and local development
//!
//! SQL-backed implementations are deployment concerns and plug in behind the
//! same traits.
pub mod local;

pub use local::LocalRepository;
