//! Predef Random — bounded random integers for scripts.
//!
//! Every execution context draws from its own generator: either the
//! thread-local one behind [`ThreadRandom`] or an owned [`OsSeededRandom`]
//! moved into a worker. Nothing on the draw path takes a lock.

pub mod provider;
pub mod source;

pub use provider::RandomProvider;
pub use source::{OsSeededRandom, ThreadRandom};
