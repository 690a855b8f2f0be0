//! Line classifier for PlantUML diagram text.
//!
//! This crate does not parse PlantUML. It looks at one line at a time and
//! decides, by an ordered list of regular-expression rules, whether the line
//! declares a node, expresses a relation between two names, or neither.
//!
//! # Example
//!
//! ```
//! use pumlcsv_core::{Element, NodeKind};
//! use pumlcsv_parser::{Classification, classify_line};
//!
//! assert_eq!(
//!     classify_line("actor User"),
//!     Classification::Matched(Element::node(NodeKind::Actor, "User")),
//! );
//! assert_eq!(classify_line("' a comment"), Classification::Ignored);
//! ```

mod classifier;


pub use classifier::{Classification, classify_line, normalize_name};

use log::trace;

use pumlcsv_core::Element;

/// A line of source text that produced an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// 1-based line number.
    pub lineno: usize,
    /// The line text without its terminator.
    pub text: &'a str,
    /// The element the line describes.
    pub element: Element,
}

/// Classify every line of `source`, yielding only the lines that matched.
///
/// Lines are split on `\n` and `\r\n` and numbered from 1. Blank, comment and
/// unrecognized lines are skipped; the yielded lines keep source order.
pub fn scan(source: &str) -> impl Iterator<Item = ClassifiedLine<'_>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, text)| {
            let lineno = index + 1;
            let classification = classify_line(text);
            if classification == Classification::NoMatch {
                trace!(lineno = lineno; "Skipping unrecognized line");
            }
            classification
                .into_element()
                .map(|element| ClassifiedLine {
                    lineno,
                    text,
                    element,
                })
        })
}
