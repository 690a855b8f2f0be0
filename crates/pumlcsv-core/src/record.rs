//! Extracted diagram elements and the records that carry them.
//!
//! # Overview
//!
//! - [`Element`] - A node declaration or an edge, as read from one line.
//! - [`ElementType`] - The `node` / `edge` discriminant written to output.
//! - [`Record`] - An [`Element`] together with the file, line number and raw
//!   text it came from.
//!
//! Records are immutable once built. The flat accessors ([`Record::source`],
//! [`Record::target`], [`Record::relation`], [`Record::label`]) present both
//! element shapes through the same columns, with empty strings where a shape
//! has no value.

use std::fmt;

use crate::NodeKind;

/// Discriminant of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Node,
    Edge,
}

impl ElementType {
    /// Returns the lowercase name used in output columns.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Node => "node",
            ElementType::Edge => "edge",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagram element recognized on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A node declaration such as `actor User`.
    Node {
        /// The declaration keyword.
        kind: NodeKind,
        /// The declared name, with quotes and surrounding whitespace removed.
        name: String,
    },
    /// A relation such as `User --> Shop : buys`.
    Edge {
        /// Left-hand operand.
        source: String,
        /// Right-hand operand.
        target: String,
        /// The arrow token exactly as written.
        arrow: String,
        /// Text after the colon, trimmed. Empty when absent.
        label: String,
    },
}

impl Element {
    /// Creates a node element.
    pub fn node(kind: NodeKind, name: impl Into<String>) -> Self {
        Self::Node {
            kind,
            name: name.into(),
        }
    }

    /// Creates an edge element.
    pub fn edge(
        source: impl Into<String>,
        target: impl Into<String>,
        arrow: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self::Edge {
            source: source.into(),
            target: target.into(),
            arrow: arrow.into(),
            label: label.into(),
        }
    }

    /// Returns whether this is a node or an edge.
    pub fn element_type(&self) -> ElementType {
        match self {
            Element::Node { .. } => ElementType::Node,
            Element::Edge { .. } => ElementType::Edge,
        }
    }
}

/// One classified line of an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    file: String,
    lineno: usize,
    element: Element,
    raw: String,
}

impl Record {
    /// Creates a record for `element` found at `lineno` (1-based) of `file`.
    ///
    /// # Arguments
    ///
    /// * `file` - Path of the source file, as it should appear in output.
    /// * `lineno` - 1-based line number.
    /// * `element` - The classified element.
    /// * `raw` - The original line text without its terminator.
    pub fn new(
        file: impl Into<String>,
        lineno: usize,
        element: Element,
        raw: impl Into<String>,
    ) -> Self {
        debug_assert!(lineno >= 1, "line numbers are 1-based");
        Self {
            file: file.into(),
            lineno,
            element,
            raw: raw.into(),
        }
    }

    /// Returns the source file path.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the 1-based line number.
    pub fn lineno(&self) -> usize {
        self.lineno
    }

    pub fn element_type(&self) -> ElementType {
        self.element.element_type()
    }

    /// Returns the node name or the left-hand operand of an edge.
    pub fn source(&self) -> &str {
        match &self.element {
            Element::Node { name, .. } => name,
            Element::Edge { source, .. } => source,
        }
    }

    /// Returns the right-hand operand of an edge, or `""` for nodes.
    pub fn target(&self) -> &str {
        match &self.element {
            Element::Node { .. } => "",
            Element::Edge { target, .. } => target,
        }
    }

    /// Returns the node keyword or the literal arrow of an edge.
    pub fn relation(&self) -> &str {
        match &self.element {
            Element::Node { kind, .. } => kind.as_str(),
            Element::Edge { arrow, .. } => arrow,
        }
    }

    /// Returns the edge label, or `""` for nodes and unlabeled edges.
    pub fn label(&self) -> &str {
        match &self.element {
            Element::Node { .. } => "",
            Element::Edge { label, .. } => label,
        }
    }

    /// Returns the original line text.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}
