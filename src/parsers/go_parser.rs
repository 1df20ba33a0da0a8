//! Go source parser wrapper using tree-sitter

use crate::error::{CleanupError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// One parsed Go file: the original text and its concrete syntax tree
///
/// The tree keeps byte spans for every token, so regions the rewrite engine
/// does not touch are re-emitted exactly as they were read.
pub struct SourceFile {
    path: PathBuf,
    text: String,
    tree: Tree,
}

impl SourceFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The `source_file` node
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("bytes", &self.text.len())
            .finish()
    }
}

/// Parser for Go sources
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Create a parser with the Go grammar loaded
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::language())
            .map_err(|e| CleanupError::grammar_error(e.to_string()))?;

        Ok(Self { parser })
    }

    /// Read and parse a file from disk
    pub fn parse_file(&mut self, path: &Path) -> Result<SourceFile> {
        let text = fs::read_to_string(path).map_err(|e| CleanupError::read_error(path, e))?;
        self.parse_str(path, text)
    }

    /// Parse source text attributed to `path`
    ///
    /// Any syntax error in the file is fatal; the rewrite engine never works
    /// on a partially recovered tree.
    pub fn parse_str(&mut self, path: impl Into<PathBuf>, text: String) -> Result<SourceFile> {
        let path = path.into();
        let tree = self.parse_tree(&text).ok_or_else(|| {
            CleanupError::parse_error(&path, "parser produced no syntax tree")
        })?;

        if let Some(message) = syntax_error(tree.root_node()) {
            return Err(CleanupError::parse_error(&path, message));
        }

        Ok(SourceFile { path, text, tree })
    }

    /// Check that rewritten text is still valid Go
    pub fn check_syntax(&mut self, path: &Path, text: &str) -> Result<()> {
        let tree = self
            .parse_tree(text)
            .ok_or_else(|| CleanupError::format_error(path, "parser produced no syntax tree"))?;

        match syntax_error(tree.root_node()) {
            Some(message) => Err(CleanupError::format_error(path, message)),
            None => Ok(()),
        }
    }

    fn parse_tree(&mut self, text: &str) -> Option<Tree> {
        // Stale state from a previous parse must not leak into this one
        self.parser.reset();
        self.parser.parse(text, None)
    }
}

/// Describe the first syntax error under `root`, if any
fn syntax_error(root: Node<'_>) -> Option<String> {
    if !root.has_error() {
        return None;
    }

    let mut cursor = root.walk();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            let what = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                "unexpected syntax".to_string()
            };
            return Some(format!("{} at {}:{}", what, pos.row + 1, pos.column + 1));
        }

        if node.has_error() {
            let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
            // Reverse so the earliest error in the file is reported first
            stack.extend(children.into_iter().rev());
        }
    }

    Some("syntax error".to_string())
}
