//! Typed view over the Go syntax nodes the rewrite engine inspects
//!
//! tree-sitter hands out untyped nodes tagged by a kind string. The handful of
//! shapes that matter for marker matching are lifted into [`ExprShape`] once,
//! so every predicate is an exhaustive match instead of a chain of kind checks.

use tree_sitter::Node;

/// The shape of an expression or type node, as far as marker matching cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprShape<'s> {
    /// A bare name: `foo`, `Foo` (type), `Foo` (field)
    Ident(&'s str),
    /// `pkg.Name` or `value.Field`; only the selected name is kept
    Selector(&'s str),
    /// `callee(args...)`
    Call(Box<ExprShape<'s>>),
    /// `*T`
    Pointer(Box<ExprShape<'s>>),
    /// `[]T`, `[N]T`, `[...]T`
    Sequence(Box<ExprShape<'s>>),
    /// Interpreted or raw string literal, quotes included
    StringLit(&'s str),
    /// Anything else; carries the node kind for diagnostics
    Other(&'static str),
}

impl<'s> ExprShape<'s> {
    /// Classify a node of a tree parsed from `src`
    pub fn of(node: Node<'_>, src: &'s str) -> Self {
        match node.kind() {
            "identifier" | "type_identifier" | "field_identifier" | "package_identifier" => {
                ExprShape::Ident(node_text(node, src))
            }
            "selector_expression" => match node.child_by_field_name("field") {
                Some(field) => ExprShape::Selector(node_text(field, src)),
                None => ExprShape::Other("selector_expression"),
            },
            "qualified_type" => match node.child_by_field_name("name") {
                Some(name) => ExprShape::Selector(node_text(name, src)),
                None => ExprShape::Other("qualified_type"),
            },
            "call_expression" => match node.child_by_field_name("function") {
                Some(callee) => ExprShape::Call(Box::new(ExprShape::of(callee, src))),
                None => ExprShape::Other("call_expression"),
            },
            "pointer_type" => match first_named_child(node) {
                Some(inner) => ExprShape::Pointer(Box::new(ExprShape::of(inner, src))),
                None => ExprShape::Other("pointer_type"),
            },
            "slice_type" | "array_type" | "implicit_length_array_type" => {
                match node.child_by_field_name("element") {
                    Some(element) => ExprShape::Sequence(Box::new(ExprShape::of(element, src))),
                    None => ExprShape::Other("sequence_type"),
                }
            }
            "interpreted_string_literal" | "raw_string_literal" => {
                ExprShape::StringLit(node_text(node, src))
            }
            // keyed/literal elements wrap a single expression
            "literal_element" | "element" => match first_named_child(node) {
                Some(inner) => ExprShape::of(inner, src),
                None => ExprShape::Other("literal_element"),
            },
            kind => ExprShape::Other(kind),
        }
    }

    /// The plain name of an identifier shape
    pub fn ident(&self) -> Option<&'s str> {
        match self {
            ExprShape::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// The name of a receiver type: `T` or `*T`
    pub fn receiver_name(&self) -> Option<&'s str> {
        match self {
            ExprShape::Ident(name) => Some(name),
            ExprShape::Pointer(inner) => inner.ident(),
            _ => None,
        }
    }

    /// The name of a called function: `f(...)` or `x.f(...)`
    pub fn call_target(&self) -> Option<&'s str> {
        match self {
            ExprShape::Call(callee) => match callee.as_ref() {
                ExprShape::Ident(name) | ExprShape::Selector(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }

    /// The type name reached by peeling pointers and sequences
    pub fn base_type_name(&self) -> Option<&'s str> {
        match self {
            ExprShape::Ident(name) | ExprShape::Selector(name) => Some(name),
            ExprShape::Pointer(inner) | ExprShape::Sequence(inner) => inner.base_type_name(),
            ExprShape::Call(_) | ExprShape::StringLit(_) | ExprShape::Other(_) => None,
        }
    }

    /// The name a literal value refers to: `x`, `f(...)`, `x.f(...)`, `x.y`
    pub fn referenced_name(&self) -> Option<&'s str> {
        match self {
            ExprShape::Ident(name) | ExprShape::Selector(name) => Some(name),
            ExprShape::Call(_) => self.call_target(),
            ExprShape::Pointer(_)
            | ExprShape::Sequence(_)
            | ExprShape::StringLit(_)
            | ExprShape::Other(_) => None,
        }
    }
}

/// Source text covered by a node
pub fn node_text<'s>(node: Node<'_>, src: &'s str) -> &'s str {
    &src[node.byte_range()]
}

/// First named child that is not a comment
pub fn first_named_child(node: Node<'_>) -> Option<Node<'_>> {
    named_children(node).into_iter().next()
}

/// Named children of a node, comments excluded
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

/// All children filling a field, e.g. every `name` of `var a, b int`
///
/// The commas between repeated names carry the field too; only named nodes
/// are returned.
pub fn field_children<'t>(node: Node<'t>, field: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node
        .children_by_field_name(field, &mut cursor)
        .filter(|child| child.is_named())
        .collect();
    children
}

/// Unwrap an `expression_list` into its expressions
pub fn list_items(node: Node<'_>) -> Vec<Node<'_>> {
    if node.kind() == "expression_list" {
        named_children(node)
    } else {
        vec![node]
    }
}
