//! Fragment scaffolds
//!
//! tree-sitter has a single entry point (a whole compilation unit). To parse
//! a fragment as a member, statement, parameter list, expression or type, the
//! fragment is spliced into the smallest C# text that puts it in that
//! position, and lifted nodes are rebased by the prefix length.

use std::sync::Arc;

use tree_sitter::{Node, Tree};

use crate::features::fragments::domain::SyntaxNode;
use crate::shared::utils::tree_sitter::{outermost_with_same_range, LineIndex};

/// Syntactic position a fragment is parsed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaffold {
    /// Parsed as-is, as a whole file
    File,
    /// Inside a class body
    Member,
    /// Inside a method body
    Statements,
    /// Between the parentheses of a method signature
    Parameters,
    /// Field initializer
    Expression,
    /// Field type
    Type,
}

impl Scaffold {
    pub fn prefix(self) -> &'static str {
        match self {
            Scaffold::File => "",
            Scaffold::Member | Scaffold::Type => "class __Fragment\n{\n",
            Scaffold::Statements => "class __Fragment\n{\nvoid __Body()\n{\n",
            Scaffold::Parameters => "class __Fragment\n{\nvoid __Body(",
            Scaffold::Expression => "class __Fragment\n{\nobject __value = ",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Scaffold::File => "",
            Scaffold::Member => "\n}\n",
            Scaffold::Statements => "\n}\n}\n",
            Scaffold::Parameters => ")\n{\n}\n}\n",
            Scaffold::Expression => ";\n}\n",
            Scaffold::Type => " __value;\n}\n",
        }
    }

    /// Human-readable position name, used in errors and logs
    pub fn category(self) -> &'static str {
        match self {
            Scaffold::File => "compilation unit",
            Scaffold::Member => "member declaration",
            Scaffold::Statements => "statement",
            Scaffold::Parameters => "parameter list",
            Scaffold::Expression => "expression",
            Scaffold::Type => "type",
        }
    }

    /// Full source handed to tree-sitter
    pub fn wrap(self, text: &str) -> String {
        let (prefix, suffix) = (self.prefix(), self.suffix());
        let mut source = String::with_capacity(prefix.len() + text.len() + suffix.len());
        source.push_str(prefix);
        source.push_str(text);
        source.push_str(suffix);
        source
    }
}

/// A parsed scaffold plus what is needed to lift nodes back into fragment
/// coordinates
pub struct ScaffoldedTree {
    pub tree: Tree,
    offset: usize,
    fragment: Arc<str>,
    lines: LineIndex,
}

impl ScaffoldedTree {
    pub fn new(tree: Tree, scaffold: Scaffold, text: &str) -> Self {
        Self {
            tree,
            offset: scaffold.prefix().len(),
            fragment: Arc::from(text),
            lines: LineIndex::new(text),
        }
    }

    /// Snapshot `node` and its subtree as an owned `SyntaxNode`
    pub fn lift(&self, node: Node<'_>) -> SyntaxNode {
        self.lift_with_field(node, None)
    }

    fn lift_with_field(&self, node: Node<'_>, field: Option<&'static str>) -> SyntaxNode {
        let mut children = Vec::with_capacity(node.child_count());
        let mut cursor = node.walk();
        if cursor.goto_first_child() {
            loop {
                children.push(self.lift_with_field(cursor.node(), cursor.field_name()));
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }

        let range = self.rebase(node.start_byte())..self.rebase(node.end_byte());
        SyntaxNode {
            kind: node.kind(),
            field,
            span: self.lines.span(range.start, range.end),
            children,
            range,
            named: node.is_named(),
            extra: node.is_extra(),
            error: node.is_error(),
            missing: node.is_missing(),
            source: Arc::clone(&self.fragment),
        }
    }

    /// Scaffold offset -> fragment offset, clamped to the fragment
    fn rebase(&self, byte: usize) -> usize {
        byte.saturating_sub(self.offset).min(self.fragment.len())
    }

    /// Outermost node spanning exactly the fragment's non-whitespace bytes,
    /// provided it lies inside `slot`
    pub fn fragment_node_within(&self, slot: Node<'_>) -> Option<Node<'_>> {
        let text: &str = &self.fragment;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let leading = text.len() - text.trim_start().len();
        let start = self.offset + leading;
        let end = start + trimmed.len();
        self.tree
            .root_node()
            .descendant_for_byte_range(start, end)
            .map(outermost_with_same_range)
            .filter(|node| {
                slot.start_byte() <= node.start_byte() && node.end_byte() <= slot.end_byte()
            })
    }
}
