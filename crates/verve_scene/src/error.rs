//! Scene error types

use thiserror::Error;

use verve_animation::TimelineError;
use verve_core::GraphError;

use crate::element::Property;

/// Errors raised while configuring or evaluating scene elements
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A value of the wrong kind was applied to a property
    #[error("property {property:?} cannot take a {found} value")]
    PropertyType {
        property: Property,
        found: &'static str,
    },

    /// A bound node produced a non-finite value
    #[error("property {property:?} received a non-finite value")]
    NonFinite { property: Property },

    /// A referenced element does not exist (or was removed)
    #[error("unknown element")]
    UnknownElement,

    /// Value graph configuration or lookup failure
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Timeline configuration failure
    #[error(transparent)]
    Timeline(#[from] TimelineError),

    /// One element's per-tick evaluation failed; the element keeps its last
    /// committed values while the rest of the scene continues
    #[error("evaluation failed for element '{name}': {source}")]
    ElementEvaluation {
        name: String,
        #[source]
        source: Box<SceneError>,
    },
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;
