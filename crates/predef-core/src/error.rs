//! Scripting-API error types.

use thiserror::Error;

use crate::definition::DefinitionKind;

/// Top-level error type for predef operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredefError {
    /// A random draw was requested over an empty or inverted range.
    #[error("invalid range: lower bound {lower} exceeds upper bound {upper_inclusive}")]
    InvalidRange {
        /// The requested lower bound.
        lower: i32,
        /// The requested inclusive upper bound.
        upper_inclusive: i32,
    },

    /// A registry had no entry for the requested id.
    #[error("definition not found for {kind} <{id}>")]
    DefinitionNotFound {
        /// The kind of registry that was queried.
        kind: DefinitionKind,
        /// The id that was queried.
        id: u32,
    },

    /// A registry returned a record whose own id differs from the queried id.
    #[error("{kind} <{id}> resolved to a record with id <{found}>")]
    DefinitionMismatch {
        /// The kind of registry that was queried.
        kind: DefinitionKind,
        /// The id that was queried.
        id: u32,
        /// The id carried by the returned record.
        found: u32,
    },

    /// Two records with the same id were supplied while building a registry.
    #[error("duplicate definition for {kind} <{id}>")]
    DuplicateDefinition {
        /// The kind of registry being built.
        kind: DefinitionKind,
        /// The repeated id.
        id: u32,
    },
}
