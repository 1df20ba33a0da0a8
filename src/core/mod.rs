//! Core functionality: discovery, marker matching, tree rewriting and orchestration

pub mod cleaner;
pub mod discovery;
pub mod edits;
pub mod import_fixer;
pub mod marker;
pub mod rewrite;

pub use cleaner::Cleaner;
pub use marker::Marker;
pub use rewrite::{FileRewrite, RemovalKind, RewriteRules, Rewriter};
