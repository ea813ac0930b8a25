//! Owned syntax node representation
//!
//! tree-sitter nodes borrow their `Tree`, so every parse result is lifted into
//! an owned `SyntaxNode` snapshot that the caller can keep after the parser
//! and tree are gone. Byte ranges and spans are relative to the caller's
//! fragment text, which every node shares through an `Arc<str>`.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::shared::models::Span;

/// Owned snapshot of one tree-sitter node and its subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// Raw tree-sitter kind (`class_declaration`, `comment`, `ERROR`, ...)
    pub kind: &'static str,

    /// Field name this node occupies in its parent, if any
    pub field: Option<&'static str>,

    pub span: Span,
    pub children: Vec<SyntaxNode>,

    pub(crate) range: Range<usize>,
    pub(crate) named: bool,
    pub(crate) extra: bool,
    pub(crate) error: bool,
    pub(crate) missing: bool,
    pub(crate) source: Arc<str>,
}

impl SyntaxNode {
    /// Named node of `kind` wrapping sibling `children` that the grammar left
    /// ungrouped; `None` for an empty run
    pub(crate) fn group(kind: &'static str, children: Vec<SyntaxNode>) -> Option<SyntaxNode> {
        let (first, last) = (children.first()?, children.last()?);
        Some(SyntaxNode {
            kind,
            field: None,
            span: first.span.merge(&last.span),
            range: first.range.start..last.range.end,
            named: true,
            extra: false,
            error: false,
            missing: false,
            source: Arc::clone(&first.source),
            children,
        })
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn field(&self) -> Option<&'static str> {
        self.field
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Byte range within the fragment this node was parsed from
    pub fn byte_range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Source text of this node, exactly as written
    pub fn text(&self) -> &str {
        self.source.get(self.range.clone()).unwrap_or("")
    }

    /// The whole fragment this node was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_named(&self) -> bool {
        self.named
    }

    /// Trivia such as comments, outside the grammar proper
    pub fn is_extra(&self) -> bool {
        self.extra
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn is_missing(&self) -> bool {
        self.missing
    }

    /// Whether this node or anything below it is an ERROR or MISSING node
    pub fn has_error(&self) -> bool {
        self.error || self.missing || self.children.iter().any(SyntaxNode::has_error)
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// Named, non-extra children
    pub fn named_children(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(|c| c.named && !c.extra)
    }

    /// Find first child occupying the given field
    pub fn child_by_field(&self, field: &str) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.field == Some(field))
    }

    /// Find first child of given kind
    pub fn find_child(&self, kind: &str) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Find all children of given kind
    pub fn find_children(&self, kind: &str) -> Vec<&SyntaxNode> {
        self.children.iter().filter(|c| c.kind == kind).collect()
    }

    /// Whether a direct child token has exactly this text (`static`, `=`)
    pub fn has_token(&self, token: &str) -> bool {
        self.children.iter().any(|c| c.text() == token)
    }

    /// Pre-order walk over this node and all descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// All descendants (including self) of given kind, in source order
    pub fn find_descendants(&self, kind: &str) -> Vec<&SyntaxNode> {
        self.descendants().filter(|n| n.kind == kind).collect()
    }

    pub fn first_descendant(&self, kind: &str) -> Option<&SyntaxNode> {
        self.descendants().find(|n| n.kind == kind)
    }

    /// Comment trivia anywhere in this subtree, in source order
    pub fn comments(&self) -> Vec<&SyntaxNode> {
        self.descendants()
            .filter(|n| n.extra && n.kind == "comment")
            .collect()
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Pre-order iterator returned by [`SyntaxNode::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A whole parsed fragment: root node plus its trivia
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    root: SyntaxNode,
}

impl SyntaxTree {
    pub fn new(root: SyntaxNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    pub fn into_root(self) -> SyntaxNode {
        self.root
    }

    pub fn source(&self) -> &str {
        self.root.source()
    }

    /// Every comment in the tree, in source order
    pub fn comments(&self) -> Vec<&SyntaxNode> {
        self.root.comments()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Hand-built leaf over `source[range]`
    pub fn leaf(kind: &'static str, source: &Arc<str>, range: Range<usize>) -> SyntaxNode {
        SyntaxNode {
            kind,
            field: None,
            span: crate::shared::utils::tree_sitter::LineIndex::new(source).span(range.start, range.end),
            children: Vec::new(),
            range,
            named: true,
            extra: false,
            error: false,
            missing: false,
            source: Arc::clone(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::leaf;
    use super::*;

    fn sample() -> SyntaxNode {
        let source: Arc<str> = Arc::from("int x; // hi");
        let mut comment = leaf("comment", &source, 7..12);
        comment.extra = true;
        let mut name = leaf("identifier", &source, 4..5);
        name.field = Some("name");
        let mut root = leaf("compilation_unit", &source, 0..12);
        root.children = vec![leaf("predefined_type", &source, 0..3), name, comment];
        root
    }

    #[test]
    fn test_text_slices_fragment() {
        let root = sample();
        assert_eq!(root.text(), "int x; // hi");
        assert_eq!(root.children[1].text(), "x");
        assert_eq!(root.to_string(), "int x; // hi");
    }

    #[test]
    fn test_child_lookup() {
        let root = sample();
        assert_eq!(root.child_by_field("name").map(SyntaxNode::text), Some("x"));
        assert_eq!(root.find_child("predefined_type").map(SyntaxNode::text), Some("int"));
        assert_eq!(root.named_children().count(), 2);
    }

    #[test]
    fn test_descendants_preorder_and_comments() {
        let root = sample();
        let kinds: Vec<&str> = root.descendants().map(SyntaxNode::kind).collect();
        assert_eq!(
            kinds,
            vec!["compilation_unit", "predefined_type", "identifier", "comment"]
        );
        assert_eq!(root.comments().len(), 1);
        assert!(!root.has_error());
    }
}
