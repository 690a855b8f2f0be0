//! Ordered classification rules for single lines.
//!
//! A line goes through [`RULES`] in order and the first rule that returns a
//! [`Classification`] decides the outcome. A line therefore yields at most one
//! element, and a line that would satisfy both the node and the relation rule
//! is always a node.

use std::sync::LazyLock;

use log::trace;
use regex::{Captures, Regex};

use pumlcsv_core::{Element, NodeKind};

/// Outcome of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Blank line or comment (`'` or `//`).
    Ignored,
    /// A node declaration or a relation.
    Matched(Element),
    /// Anything else. Not an error; the line is dropped.
    NoMatch,
}

impl Classification {
    /// Returns the matched element, if any.
    pub fn into_element(self) -> Option<Element> {
        match self {
            Classification::Matched(element) => Some(element),
            Classification::Ignored | Classification::NoMatch => None,
        }
    }
}

/// Node declaration: keyword, whitespace, then a name that may be quoted.
///
/// The keyword is folded as ASCII only, the same way [`NodeKind`] parses it.
static NODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(?P<kind>(?i-u:actor|participant|class|interface|database|node|folder|artifact))\s+(?P<name>"?[\w\-./: ]+"?)"#,
    )
    .expect("node pattern is valid")
});

/// Relation: `left <arrow> right [: label]`.
///
/// An unquoted operand is a run of space-separated words. A word may contain
/// `- . / :` but must end on a word character or `/`, so the arrow next to it
/// is never absorbed. The right operand is lazy so a trailing `: label` is not
/// taken as part of the name.
///
/// An arrow body may carry one direction word (`-up->`, `-l->`). Heads and
/// tails cover inheritance, composition, aggregation and crow's-foot ends.
/// A trailing `o` only counts as a tail when a word boundary follows it, so
/// `A --orange` stays a link to `orange`.
static RELATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    const WORD: &str = r"\w(?:[\w\-./:]*[\w/])?";
    const LAZY_WORD: &str = r"\w(?:[\w\-./:]*?[\w/])??";
    const HEAD: &str = r"<\||<<?|\*|\|\||\|o|\}\||\}o|\}";
    const BODY: &str = r"[-.]+(?:(?:up|down|left|right|u|d|l|r)[-.]+)?";
    const TAIL: &str = r"\|>|>>?|\|\||\|\{|o\{|o\||\||\*|\{|o\b";

    let arrow = format!(r"(?:{HEAD})?{BODY}(?:{TAIL})?|>+");
    let pattern = format!(
        r#"^\s*(?P<left>"[^"]*"|{WORD}(?: +{WORD})*)\s*(?P<arrow>{arrow})\s*(?P<right>"[^"]*"|{LAZY_WORD}(?: +{LAZY_WORD})*?)\s*(?::(?P<label>[^:].*)?)?\s*$"#
    );
    Regex::new(&pattern).expect("relation pattern is valid")
});

/// A named classification step.
struct Rule {
    name: &'static str,
    apply: fn(&str) -> Option<Classification>,
}

/// Classification rules in priority order.
const RULES: &[Rule] = &[
    Rule {
        name: "blank-or-comment",
        apply: ignore_blank_or_comment,
    },
    Rule {
        name: "node",
        apply: match_node,
    },
    Rule {
        name: "relation",
        apply: match_relation,
    },
];

/// Classify a single line of PlantUML text.
///
/// The line is expected without its terminator. Leading whitespace is allowed.
///
/// # Examples
///
/// ```
/// use pumlcsv_core::Element;
/// use pumlcsv_parser::{Classification, classify_line};
///
/// let classified = classify_line("User --> OS : places order");
/// assert_eq!(
///     classified,
///     Classification::Matched(Element::edge("User", "OS", "-->", "places order")),
/// );
/// ```
pub fn classify_line(line: &str) -> Classification {
    for rule in RULES {
        if let Some(classification) = (rule.apply)(line) {
            trace!(rule = rule.name; "Line classified");
            return classification;
        }
    }
    Classification::NoMatch
}

/// Strip surrounding whitespace and double quotes from a name token.
pub fn normalize_name(name: &str) -> String {
    name.trim().trim_matches('"').trim().to_string()
}

fn ignore_blank_or_comment(line: &str) -> Option<Classification> {
    let trimmed = line.trim();
    (trimmed.is_empty() || trimmed.starts_with('\'') || trimmed.starts_with("//"))
        .then_some(Classification::Ignored)
}

fn match_node(line: &str) -> Option<Classification> {
    let caps = NODE_RE.captures(line)?;
    let kind: NodeKind = caps["kind"].parse().ok()?;
    let name = normalize_name(&caps["name"]);
    Some(Classification::Matched(Element::node(kind, name)))
}

fn match_relation(line: &str) -> Option<Classification> {
    let caps = RELATION_RE.captures(line)?;
    Some(Classification::Matched(Element::edge(
        normalize_name(&caps["left"]),
        normalize_name(&caps["right"]),
        &caps["arrow"],
        optional_group(&caps, "label").trim(),
    )))
}

fn optional_group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}
