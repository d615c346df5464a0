//! Payload types stored in citation graph nodes.
//!
//! The graph only needs two things from a payload: it must be buildable from
//! an identifier, and it must hand that identifier back. Everything else a
//! publication carries is opaque to the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Publication ───────────────────────────────────────────────────

/// A value that can be stored in a citation graph node.
pub trait Publication {
    /// Identifier used as the graph's index key.
    type Id: Ord + Clone + fmt::Debug;

    /// Build a publication from its identifier.
    fn from_id(id: Self::Id) -> Self;

    /// The identifier this publication was built from.
    fn id(&self) -> Self::Id;
}

// ── Paper ─────────────────────────────────────────────────────────

/// Identifier of a paper, e.g. a DOI or a short citation key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PaperId(pub String);

impl PaperId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaperId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PaperId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The default payload: a paper known by its id, optionally titled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paper {
    pub id: PaperId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Publication for Paper {
    type Id = PaperId;

    fn from_id(id: PaperId) -> Self {
        Self { id, title: None }
    }

    fn id(&self) -> PaperId {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_from_id() {
        let paper = Paper::from_id(PaperId::from("knuth1974"));
        assert_eq!(paper.id(), PaperId::from("knuth1974"));
        assert_eq!(paper.title, None);
    }

    #[test]
    fn test_paper_id_ordering() {
        let mut ids = vec![PaperId::from("b"), PaperId::from("c"), PaperId::from("a")];
        ids.sort();
        assert_eq!(ids, vec![PaperId::from("a"), PaperId::from("b"), PaperId::from("c")]);
    }

    #[test]
    fn test_paper_serialization() {
        let mut paper = Paper::from_id("dijkstra1968".into());
        let json = serde_json::to_value(&paper).unwrap();
        assert_eq!(json, serde_json::json!({"id": "dijkstra1968"}));

        paper.title = Some("Go To Statement Considered Harmful".to_string());
        let json = serde_json::to_string(&paper).unwrap();
        let back: Paper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, paper);
    }

    #[test]
    fn test_paper_id_display() {
        assert_eq!(PaperId::from("R").to_string(), "R");
    }
}
