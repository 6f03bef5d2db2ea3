//! Outcomes of tolerant graph mutations.
//!
//! Mutations never fail: invalid input is absorbed and the graph is left untouched. The returned
//! [`Outcome`] tells the caller whether the operation was applied, and if not, why.
use thiserror::Error;

/// Reason a mutation was ignored.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IgnoreReason {
    /// Both endpoints of the edge are the same vertex.
    #[error("self-loops are not allowed")]
    SelfLoop,
    /// The edge weight is zero, which is reserved for "no edge".
    #[error("edge weight must be at least 1")]
    NonPositiveWeight,
    /// A vertex index is outside of `0..count`.
    #[error("vertex {vertex} is out of range (graph has {count} vertices)")]
    VertexOutOfRange {
        /// Offending vertex index
        vertex: usize,
        /// Number of vertices in the graph at the time of the call
        count: usize,
    },
    /// A labelled vertex does not exist in the graph.
    #[error("vertex does not exist")]
    MissingVertex,
    /// Both endpoints exist, but they are not connected.
    #[error("edge does not exist")]
    MissingEdge,
    /// The vertex is already part of the graph.
    #[error("vertex already exists")]
    VertexExists,
}

/// Result of a tolerant mutation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// The graph was modified (or already was in the requested state).
    Applied,
    /// The operation was a no-op.
    Ignored(IgnoreReason),
}

impl Outcome {
    /// Returns true if the operation was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Returns true if the operation was ignored.
    pub fn is_ignored(&self) -> bool {
        !self.is_applied()
    }

    /// Reason the operation was ignored, if it was.
    pub fn reason(&self) -> Option<IgnoreReason> {
        match self {
            Self::Applied => None,
            Self::Ignored(reason) => Some(*reason),
        }
    }

    /// Turns the outcome into a [`Result`], for callers who want to treat no-ops as errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use twingraph::errors::IgnoreReason;
    /// use twingraph::DirectedWeightedGraph;
    ///
    /// let mut graph = DirectedWeightedGraph::<u32>::with_vertices(2);
    /// assert_eq!(Ok(()), graph.add_edge(0, 1, 4).into_result());
    /// assert_eq!(Err(IgnoreReason::SelfLoop), graph.add_edge(1, 1, 4).into_result());
    /// ```
    pub fn into_result(self) -> Result<(), IgnoreReason> {
        match self {
            Self::Applied => Ok(()),
            Self::Ignored(reason) => Err(reason),
        }
    }

    pub(crate) fn ignored(operation: &str, reason: IgnoreReason) -> Self {
        log::debug!("{operation}: ignored ({reason})");
        Self::Ignored(reason)
    }
}

impl From<IgnoreReason> for Outcome {
    fn from(value: IgnoreReason) -> Self {
        Self::Ignored(value)
    }
}
