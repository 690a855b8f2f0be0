//! pumlcsv Core Types and Definitions
//!
//! This crate provides the data model shared by the PlantUML extractor
//! crates. It includes:
//!
//! - **Node kinds**: The declaration keywords a node line may start with ([`NodeKind`])
//! - **Elements**: What a classified line describes ([`Element`], [`ElementType`])
//! - **Records**: An element anchored to its file and line ([`Record`])

mod node_kind;
mod record;

pub use node_kind::{NodeKind, ParseNodeKindError};
pub use record::{Element, ElementType, Record};
