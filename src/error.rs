//! Error type shared by the bundling stages.
//!
//! Degenerate geometry (zero-length edges, coincident points) is never an
//! error: the numeric floors in [`crate::params::Tolerances`] absorb it. The
//! variants below cover inputs that are rejected before any work starts and
//! the internal shape check performed by the output assembler.

/// Reasons a bundling call can fail.
#[derive(Clone, Debug, PartialEq)]
pub enum BundleError {
    /// A simulation parameter is out of its admissible range.
    InvalidParameter { name: &'static str, reason: String },
    /// Polylines of differing lengths reached a stage that needs a fixed stride.
    ShapeMismatch {
        edge: usize,
        expected: usize,
        found: usize,
    },
    /// The weight slice does not have one entry per edge.
    WeightCountMismatch { edges: usize, weights: usize },
    /// An edge coordinate or weight is NaN or infinite.
    NonFiniteInput { edge: usize },
    /// A graph link references a node index that does not exist.
    UnknownNode {
        link: usize,
        node: usize,
        nodes: usize,
    },
}

impl BundleError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        BundleError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for BundleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleError::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{name}`: {reason}")
            }
            BundleError::ShapeMismatch {
                edge,
                expected,
                found,
            } => write!(
                f,
                "polyline {edge} has {found} points, expected {expected}"
            ),
            BundleError::WeightCountMismatch { edges, weights } => write!(
                f,
                "weights length ({weights}) must match edge count ({edges})"
            ),
            BundleError::NonFiniteInput { edge } => {
                write!(f, "edge {edge} contains a non-finite value")
            }
            BundleError::UnknownNode { link, node, nodes } => write!(
                f,
                "link {link} references node {node}, but only {nodes} nodes exist"
            ),
        }
    }
}

impl std::error::Error for BundleError {}
