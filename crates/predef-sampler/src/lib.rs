//! Predef sampler — exercises the random provider from many workers.

pub mod config;
pub mod error;
pub mod sampler;
