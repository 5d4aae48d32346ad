//! Shared test sources and registries for the scripting predefs.

mod registry;
mod rng;

pub use registry::{EmptyRegistry, RecordingRegistry};
pub use rng::{MaxSource, MinSource, SequenceSource};
