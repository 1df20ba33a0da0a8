//! Go source parsing
//!
//! Wraps the tree-sitter Go grammar and lifts the node shapes the rewrite
//! engine inspects into typed values.

pub mod go_parser;
pub mod syntax;

pub use go_parser::{GoParser, SourceFile};
pub use syntax::ExprShape;
