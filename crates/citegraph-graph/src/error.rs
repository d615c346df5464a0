//! Error types for the citegraph-graph crate.

use thiserror::Error;

/// Failures reported by `CitationGraph` operations.
///
/// Every variant carries the identifier that caused it. A failed operation
/// leaves the graph exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<Id> {
    #[error("Publication not found: {0:?}")]
    NotFound(Id),

    #[error("Publication already created: {0:?}")]
    AlreadyExists(Id),

    #[error("Tried to remove the root publication {0:?}")]
    CannotRemoveRoot(Id),

    #[error("No parent publications given for {0:?}")]
    EmptyParentList(Id),

    #[error("Root publication {0:?} cannot cite other publications")]
    RootCitation(Id),

    #[error("Out of capacity while linking {child:?} to {parent:?}")]
    CapacityExhausted { child: Id, parent: Id },
}

impl<Id> GraphError<Id> {
    /// Stable name of the error kind, independent of the identifier.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "PublicationNotFound",
            Self::AlreadyExists(_) => "PublicationAlreadyCreated",
            Self::CannotRemoveRoot(_) => "TriedToRemoveRoot",
            Self::EmptyParentList(_) => "EmptyParentList",
            Self::RootCitation(_) => "RootCitation",
            Self::CapacityExhausted { .. } => "CapacityExhausted",
        }
    }

    /// The identifier the failing operation was about.
    pub fn id(&self) -> &Id {
        match self {
            Self::NotFound(id)
            | Self::AlreadyExists(id)
            | Self::CannotRemoveRoot(id)
            | Self::EmptyParentList(id)
            | Self::RootCitation(id) => id,
            Self::CapacityExhausted { child, .. } => child,
        }
    }
}

pub type Result<T, Id> = std::result::Result<T, GraphError<Id>>;
