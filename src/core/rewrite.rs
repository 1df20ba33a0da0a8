//! Tree rewrite engine
//!
//! Finds the marked constructs of one parsed file and produces the rewritten
//! text. The tree itself is never mutated: every pass records the spans it
//! drops, later passes skip anything inside an already dropped span, and the
//! new text is spliced together once at the end.
//!
//! Passes run once, in file order. A declaration group that only becomes
//! fully marked after another removal, or a struct left empty by field
//! removal, stays until the next invocation.

use crate::core::edits::{self, Separator};
use crate::core::marker::Marker;
use crate::error::Result;
use crate::models::config::Settings;
use crate::parsers::go_parser::SourceFile;
use crate::parsers::syntax::{
    field_children, first_named_child, list_items, named_children, node_text, ExprShape,
};
use std::ops::Range;
use tracing::debug;
use tree_sitter::Node;

/// Names and literals the passes match against
#[derive(Debug, Clone)]
pub struct RewriteRules {
    pub marker: Marker,
    /// Element type of the routing table slice (`[]route{...}`)
    pub route_element_type: String,
    /// Key holding the path inside a route literal
    pub route_path_key: String,
}

impl RewriteRules {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            marker: Marker::new(&settings.marker)?,
            route_element_type: settings.route_element_type.clone(),
            route_path_key: settings.route_path_key.clone(),
        })
    }
}

impl Default for RewriteRules {
    fn default() -> Self {
        Self {
            marker: Marker::default(),
            route_element_type: "route".to_string(),
            route_path_key: "Path".to_string(),
        }
    }
}

/// Which pass dropped a construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalKind {
    Declaration,
    Field,
    Statement,
    Route,
    LiteralEntry,
}

impl std::fmt::Display for RemovalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemovalKind::Declaration => write!(f, "declaration"),
            RemovalKind::Field => write!(f, "field"),
            RemovalKind::Statement => write!(f, "statement"),
            RemovalKind::Route => write!(f, "route"),
            RemovalKind::LiteralEntry => write!(f, "literal entry"),
        }
    }
}

/// One dropped construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub kind: RemovalKind,
    /// First line of the dropped source, trimmed
    pub label: String,
    /// 1-based line of the construct in the original file
    pub line: usize,
    span: Range<usize>,
    separator: Separator,
}

/// Which passes changed the file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassOutcome {
    pub declarations: bool,
    pub fields: bool,
    pub statements: bool,
    pub routes: bool,
    pub literals: bool,
}

impl PassOutcome {
    pub fn any(&self) -> bool {
        self.declarations || self.fields || self.statements || self.routes || self.literals
    }
}

/// Result of rewriting one file
#[derive(Debug, Clone)]
pub struct FileRewrite {
    pub outcome: PassOutcome,
    removals: Vec<Removal>,
    text: Option<String>,
}

impl FileRewrite {
    pub fn is_modified(&self) -> bool {
        self.outcome.any()
    }

    pub fn removals(&self) -> &[Removal] {
        &self.removals
    }

    /// The new file contents, present only when something was removed
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Applies the removal passes to parsed files
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    rules: RewriteRules,
}

impl Rewriter {
    pub fn new(rules: RewriteRules) -> Self {
        Self { rules }
    }

    /// Run every pass over `file` and build the rewritten text
    pub fn rewrite(&self, file: &SourceFile) -> FileRewrite {
        let mut pass = Pass {
            rules: &self.rules,
            src: file.text(),
            removals: Vec::new(),
        };
        let mut outcome = PassOutcome::default();

        for decl in named_children(file.root()) {
            if pass.should_remove_decl(decl) {
                pass.remove(RemovalKind::Declaration, decl, Separator::None);
                outcome.declarations = true;
                continue;
            }

            match decl.kind() {
                "type_declaration" => {
                    outcome.fields |= pass.remove_fields(decl);
                }
                "function_declaration" | "method_declaration" => {
                    if let Some(body) = decl.child_by_field_name("body") {
                        outcome.statements |= pass.remove_statements(body);
                        outcome.routes |= pass.remove_routes(body);
                        outcome.literals |= pass.remove_literal_entries(body);
                    }
                }
                _ => {}
            }
        }

        let text = if outcome.any() {
            let ranges: Vec<Range<usize>> = pass
                .removals
                .iter()
                .map(|r| edits::removal_range(file.text(), r.span.clone(), r.separator))
                .collect();
            Some(edits::apply_removals(file.text(), &ranges))
        } else {
            None
        };

        debug!(
            path = %file.path().display(),
            removals = pass.removals.len(),
            "rewrite passes finished"
        );

        FileRewrite {
            outcome,
            removals: pass.removals,
            text,
        }
    }
}

/// State shared by the passes over one file
struct Pass<'r, 's> {
    rules: &'r RewriteRules,
    src: &'s str,
    removals: Vec<Removal>,
}

impl<'r, 's> Pass<'r, 's> {
    fn marked(&self, ident: &str) -> bool {
        self.rules.marker.is_marked(ident)
    }

    fn text(&self, node: Node<'_>) -> &'s str {
        node_text(node, self.src)
    }

    fn shape(&self, node: Node<'_>) -> ExprShape<'s> {
        ExprShape::of(node, self.src)
    }

    /// Whether `node` sits inside something already dropped
    fn is_removed(&self, node: Node<'_>) -> bool {
        let span = node.byte_range();
        self.removals
            .iter()
            .any(|r| r.span.start <= span.start && span.end <= r.span.end)
    }

    fn remove(&mut self, kind: RemovalKind, node: Node<'_>, separator: Separator) {
        let label = self
            .text(node)
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        let line = node.start_position().row + 1;
        debug!(%kind, line, label = %label, "removing marked construct");

        self.removals.push(Removal {
            kind,
            label,
            line,
            span: node.byte_range(),
            separator,
        });
    }

    // ----- declarations -----

    fn should_remove_decl(&self, decl: Node<'_>) -> bool {
        match decl.kind() {
            "type_declaration" => {
                let specs = type_specs(decl);
                !specs.is_empty()
                    && specs.iter().all(|spec| {
                        spec.child_by_field_name("name")
                            .is_some_and(|name| self.marked(self.text(name)))
                    })
            }
            "var_declaration" | "const_declaration" => {
                let specs = value_specs(decl);
                !specs.is_empty()
                    && specs.iter().all(|spec| {
                        field_children(*spec, "name")
                            .into_iter()
                            .all(|name| self.marked(self.text(name)))
                    })
            }
            "function_declaration" => decl
                .child_by_field_name("name")
                .is_some_and(|name| self.marked(self.text(name))),
            "method_declaration" => {
                let name_marked = decl
                    .child_by_field_name("name")
                    .is_some_and(|name| self.marked(self.text(name)));

                name_marked || self.receiver_marked(decl)
            }
            _ => false,
        }
    }

    fn receiver_marked(&self, method: Node<'_>) -> bool {
        let Some(receiver) = method.child_by_field_name("receiver") else {
            return false;
        };

        named_children(receiver)
            .into_iter()
            .find(|param| param.kind() == "parameter_declaration")
            .and_then(|param| param.child_by_field_name("type"))
            .and_then(|ty| self.shape(ty).receiver_name())
            .is_some_and(|name| self.marked(name))
    }

    // ----- struct fields -----

    fn remove_fields(&mut self, decl: Node<'_>) -> bool {
        let mut modified = false;

        for spec in type_specs(decl) {
            let Some(struct_type) = spec.child_by_field_name("type") else {
                continue;
            };
            if struct_type.kind() != "struct_type" {
                continue;
            }
            let Some(list) = named_children(struct_type)
                .into_iter()
                .find(|n| n.kind() == "field_declaration_list")
            else {
                continue;
            };

            for field in named_children(list) {
                if field.kind() == "field_declaration" && self.field_marked(field) {
                    self.remove(RemovalKind::Field, field, Separator::Semicolon);
                    modified = true;
                }
            }
        }

        modified
    }

    fn field_marked(&self, field: Node<'_>) -> bool {
        let name_marked = field_children(field, "name")
            .into_iter()
            .any(|name| self.marked(self.text(name)));

        name_marked
            || field
                .child_by_field_name("type")
                .and_then(|ty| self.shape(ty).base_type_name())
                .is_some_and(|name| self.marked(name))
    }

    // ----- statements -----

    fn remove_statements(&mut self, body: Node<'_>) -> bool {
        let mut modified = false;

        for stmt in block_statements(body) {
            if self.statement_marked(stmt) {
                self.remove(RemovalKind::Statement, stmt, Separator::Semicolon);
                modified = true;
            }
        }

        modified
    }

    fn statement_marked(&self, stmt: Node<'_>) -> bool {
        if !matches!(stmt.kind(), "assignment_statement" | "short_var_declaration") {
            return false;
        }

        // userHandler := NewKooUserHandler(...)
        let calls_marked = stmt
            .child_by_field_name("right")
            .map(list_items)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|rhs| self.shape(rhs).call_target())
            .any(|target| self.marked(target));
        if calls_marked {
            return true;
        }

        // kooUserHandler := ..., matched loosely on purpose
        stmt.child_by_field_name("left")
            .map(list_items)
            .unwrap_or_default()
            .into_iter()
            .filter(|lhs| lhs.kind() == "identifier")
            .any(|lhs| self.rules.marker.is_loosely_marked(self.text(lhs)))
    }

    // ----- routes -----

    fn remove_routes(&mut self, body: Node<'_>) -> bool {
        let mut modified = false;

        for node in preorder(body) {
            if node.kind() != "composite_literal"
                || self.is_removed(node)
                || !self.is_route_table(node)
            {
                continue;
            }
            let Some(elements) = node.child_by_field_name("body") else {
                continue;
            };

            for element in named_children(elements) {
                if element.kind() == "keyed_element" || self.is_removed(element) {
                    continue;
                }
                if self.route_path_marked(element) {
                    self.remove(RemovalKind::Route, element, Separator::Comma);
                    modified = true;
                }
            }
        }

        modified
    }

    /// `[]route{...}` or `[N]route{...}`
    fn is_route_table(&self, literal: Node<'_>) -> bool {
        let Some(ty) = literal.child_by_field_name("type") else {
            return false;
        };

        match self.shape(ty) {
            ExprShape::Sequence(element) => {
                element.ident() == Some(self.rules.route_element_type.as_str())
            }
            _ => false,
        }
    }

    fn route_path_marked(&self, element: Node<'_>) -> bool {
        let Some(entries) = literal_body(element) else {
            return false;
        };

        named_children(entries)
            .into_iter()
            .filter(|entry| entry.kind() == "keyed_element")
            .any(|entry| {
                let (Some(key), Some(value)) = keyed_parts(entry) else {
                    return false;
                };
                if self.shape(key).ident() != Some(self.rules.route_path_key.as_str()) {
                    return false;
                }
                match self.shape(value) {
                    ExprShape::StringLit(lit) => lit.contains(self.rules.marker.route_path()),
                    _ => false,
                }
            })
    }

    // ----- composite literal entries -----

    fn remove_literal_entries(&mut self, body: Node<'_>) -> bool {
        let mut modified = false;

        for node in preorder(body) {
            if node.kind() != "literal_value" || self.is_removed(node) {
                continue;
            }

            for entry in named_children(node) {
                if entry.kind() != "keyed_element" || self.is_removed(entry) {
                    continue;
                }
                if self.entry_marked(entry) {
                    self.remove(RemovalKind::LiteralEntry, entry, Separator::Comma);
                    modified = true;
                }
            }
        }

        modified
    }

    fn entry_marked(&self, entry: Node<'_>) -> bool {
        let (key, value) = keyed_parts(entry);

        let key_marked = key
            .and_then(|k| self.shape(k).ident())
            .is_some_and(|name| self.marked(name));

        key_marked
            || value
                .and_then(|v| self.shape(v).referenced_name())
                .is_some_and(|name| self.marked(name))
    }
}

/// `type_spec` / `type_alias` children of a type declaration
fn type_specs(decl: Node<'_>) -> Vec<Node<'_>> {
    named_children(decl)
        .into_iter()
        .filter(|n| matches!(n.kind(), "type_spec" | "type_alias"))
        .collect()
}

/// `var_spec` / `const_spec` children, looking through grouping nodes
fn value_specs(decl: Node<'_>) -> Vec<Node<'_>> {
    let mut specs = Vec::new();
    for child in named_children(decl) {
        match child.kind() {
            "var_spec" | "const_spec" => specs.push(child),
            "var_spec_list" | "const_spec_list" => specs.extend(value_specs(child)),
            _ => {}
        }
    }
    specs
}

/// Direct statements of a block
fn block_statements(block: Node<'_>) -> Vec<Node<'_>> {
    let mut statements = Vec::new();
    for child in named_children(block) {
        if child.kind() == "statement_list" {
            statements.extend(named_children(child));
        } else {
            statements.push(child);
        }
    }
    statements
}

/// The `{...}` of an element that is itself a literal: `{...}` or `T{...}`
fn literal_body(element: Node<'_>) -> Option<Node<'_>> {
    let inner = match element.kind() {
        "literal_element" | "element" => first_named_child(element)?,
        _ => element,
    };

    match inner.kind() {
        "literal_value" => Some(inner),
        "composite_literal" => inner.child_by_field_name("body"),
        _ => None,
    }
}

/// Key and value of a `key: value` element
fn keyed_parts(entry: Node<'_>) -> (Option<Node<'_>>, Option<Node<'_>>) {
    let children = named_children(entry);
    let key = entry
        .child_by_field_name("key")
        .or_else(|| children.first().copied());
    let value = entry
        .child_by_field_name("value")
        .or_else(|| children.last().copied());
    (key, value)
}

/// All nodes under `root` (inclusive), parents before children, in file order
fn preorder(root: Node<'_>) -> Vec<Node<'_>> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(node);
        let mut children = named_children(node);
        children.reverse();
        stack.extend(children);
    }
    out
}
