//! Predef Core — shared scripting-API abstractions.
//!
//! This crate defines the traits and error type that the random and
//! definition crates build on. It contains no infrastructure code.

pub mod definition;
pub mod error;
pub mod registry;
pub mod rng;
