use thiserror::Error;

use crate::model::ElementId;

/// Top-level error type for the shellfoot mesh kernel.
#[derive(Debug, Error)]
pub enum ShellfootError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    DegenerateInput(#[from] DegenerateInputError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors raised while validating the user's selection, before any
/// mesh mutation takes place.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("must pick at least two edge nodes, got {0}")]
    TooFewEdgeNodes(usize),

    #[error("no boundary elements selected")]
    EmptyBoundary,
}

/// Errors detected mid-traversal from the geometry of the selection.
///
/// These may leave nodes and elements created for earlier boundary
/// elements in the model; there is no transactional rollback.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error(
        "element {element:?} has {found} corner(s) on the foot plane, need 2; \
         it does not touch the selected edge"
    )]
    InsufficientEdgeNodes { element: ElementId, found: usize },
}

/// Precondition violations from degenerate input geometry.
#[derive(Debug, Error)]
pub enum DegenerateInputError {
    #[error("edge nodes are coincident, edge direction is undefined")]
    CoincidentEdgeNodes,

    #[error("element {element:?} has a zero-area winding, normal is undefined")]
    ZeroAreaElement { element: ElementId },

    #[error(
        "edge direction is parallel to the normal of element {element:?}, \
         foot plane is undefined"
    )]
    EdgeParallelToNormal { element: ElementId },
}

/// Errors from mesh-model lookups and part data.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("part resolves to a non-positive thickness ({0})")]
    NonPositiveThickness(f64),

    #[error("composite part has no layers")]
    EmptyComposite,

    #[error("a rigid body already couples node set {0}")]
    DuplicateRigidBody(u32),
}

/// Convenience type alias for results using [`ShellfootError`].
pub type Result<T> = std::result::Result<T, ShellfootError>;
