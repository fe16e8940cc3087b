//! Core error types

use thiserror::Error;

/// Errors raised while configuring or mutating the value graph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Rebinding a mapped node would make it (transitively) its own input
    #[error("cyclic dependency: node chain feeds back into itself")]
    CyclicDependency,

    /// Mapper definition is malformed
    #[error("invalid mapper: {0}")]
    InvalidMapper(String),

    /// A referenced node does not exist (or was removed)
    #[error("unknown node")]
    UnknownNode,

    /// Writing to a derived node; only source nodes accept external writes
    #[error("node is derived and cannot be written directly")]
    NotWritable,
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
