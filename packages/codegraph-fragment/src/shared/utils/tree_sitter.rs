//! Tree-sitter Utility Functions
//!
//! Raw `tree_sitter::Node` helpers used while locating a fragment inside its
//! scaffold, before the subtree is lifted into an owned `SyntaxNode`.

use crate::shared::models::Span;
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
///
/// # Example
/// ```ignore
/// let body = find_child_by_kind(&class_node, "declaration_list");
/// ```
#[inline]
pub fn find_child_by_kind<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Named, non-extra children: the grammar-level members of a list node
/// (declarations in a `declaration_list`, statements in a `block`).
pub fn member_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

/// Climb to the outermost ancestor covering exactly the same bytes
pub fn outermost_with_same_range<'t>(node: Node<'t>) -> Node<'t> {
    let mut current = node;
    while let Some(parent) = current.parent() {
        if parent.byte_range() != current.byte_range() {
            break;
        }
        current = parent;
    }
    current
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Byte offset -> (line, column) lookup over a single source text
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    /// 1-indexed line, 0-indexed byte column
    pub fn position(&self, offset: usize) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        (line as u32 + 1, (offset - self.line_starts[line]) as u32)
    }

    pub fn span(&self, start_byte: usize, end_byte: usize) -> Span {
        let (start_line, start_col) = self.position(start_byte);
        let (end_line, end_col) = self.position(end_byte);
        Span::new(start_line, start_col, end_line, end_col)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse_csharp(code: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::language())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_find_child_by_kind() {
        let code = "class Foo { }";
        let tree = parse_csharp(code);
        let root = tree.root_node();

        let class = find_child_by_kind(&root, "class_declaration");
        assert!(class.is_some());
        assert!(find_child_by_kind(&root, "interface_declaration").is_none());
    }

    #[test]
    fn test_member_children_skips_comments() {
        let code = "class A {\n// note\nint x;\nint y;\n}";
        let tree = parse_csharp(code);
        let root = tree.root_node();
        let class = find_child_by_kind(&root, "class_declaration").unwrap();
        let body = find_child_by_kind(&class, "declaration_list").unwrap();

        let members = member_children(&body);
        assert_eq!(members.len(), 2);
        assert!(members.iter().all(|m| m.kind() == "field_declaration"));
    }

    #[test]
    fn test_line_index_positions() {
        let source = "ab\ncd\n\nef";
        let index = LineIndex::new(source);
        assert_eq!(index.position(0), (1, 0));
        assert_eq!(index.position(2), (1, 2));
        assert_eq!(index.position(3), (2, 0));
        assert_eq!(index.position(6), (3, 0));
        assert_eq!(index.position(8), (4, 1));
    }
}
