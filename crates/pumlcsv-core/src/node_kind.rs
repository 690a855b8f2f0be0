//! Node declaration keywords.
//!
//! A PlantUML node declaration starts with one of a fixed set of keywords
//! (`actor`, `class`, ...). [`NodeKind`] enumerates the keywords the extractor
//! recognizes. Keywords are matched case-insensitively and always rendered in
//! lowercase.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// The keyword that introduced a node declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Actor,
    Participant,
    Class,
    Interface,
    Database,
    Node,
    Folder,
    Artifact,
}

impl NodeKind {
    /// Every recognized keyword, in declaration order.
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Actor,
        NodeKind::Participant,
        NodeKind::Class,
        NodeKind::Interface,
        NodeKind::Database,
        NodeKind::Node,
        NodeKind::Folder,
        NodeKind::Artifact,
    ];

    /// Returns the lowercase keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Actor => "actor",
            NodeKind::Participant => "participant",
            NodeKind::Class => "class",
            NodeKind::Interface => "interface",
            NodeKind::Database => "database",
            NodeKind::Node => "node",
            NodeKind::Folder => "folder",
            NodeKind::Artifact => "artifact",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a recognized node keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node keyword `{0}`")]
pub struct ParseNodeKindError(String);

impl FromStr for NodeKind {
    type Err = ParseNodeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNodeKindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("actor".parse::<NodeKind>(), Ok(NodeKind::Actor));
        assert_eq!("CLASS".parse::<NodeKind>(), Ok(NodeKind::Class));
        assert_eq!("DataBase".parse::<NodeKind>(), Ok(NodeKind::Database));
    }

    #[test]
    fn test_from_str_rejects_unknown_keyword() {
        let err = "package".parse::<NodeKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown node keyword `package`");
    }

    #[test]
    fn test_display_round_trips_every_keyword() {
        for kind in NodeKind::ALL {
            let rendered = kind.to_string();
            assert_eq!(rendered, rendered.to_lowercase());
            assert_eq!(rendered.parse::<NodeKind>(), Ok(kind));
        }
    }
}
