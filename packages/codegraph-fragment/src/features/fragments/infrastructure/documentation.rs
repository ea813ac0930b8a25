//! Documentation comment extraction
//!
//! tree-sitter keeps comments as plain `comment` trivia. Documentation blocks
//! are recovered from them here: `///` comments on consecutive lines form one
//! block, a `/** */` comment is a block on its own.

use tracing::debug;

use super::xml::read_xml_fragment;
use crate::features::fragments::domain::{DocumentationComment, SyntaxNode, SyntaxTree};

fn is_line_doc(text: &str) -> bool {
    text.starts_with("///") && !text.starts_with("////")
}

fn is_block_doc(text: &str) -> bool {
    text.starts_with("/**") && !text.starts_with("/**/")
}

/// All documentation blocks of `tree`, in source order
pub fn documentation_blocks(tree: &SyntaxTree) -> Vec<DocumentationComment> {
    let source = tree.source();
    let mut groups: Vec<Vec<&SyntaxNode>> = Vec::new();

    for comment in tree.comments() {
        let text = comment.text();
        if is_block_doc(text) {
            groups.push(vec![comment]);
        } else if is_line_doc(text) {
            match groups.last_mut() {
                Some(group) if continues_line_block(group, comment, source) => group.push(comment),
                _ => groups.push(vec![comment]),
            }
        }
    }

    debug!("Found {} documentation block(s)", groups.len());
    groups.into_iter().map(build_block).collect()
}

/// `next` sits on the line right after the last `///` line of `group`
fn continues_line_block(group: &[&SyntaxNode], next: &SyntaxNode, source: &str) -> bool {
    let Some(prev) = group.last() else {
        return false;
    };
    if !is_line_doc(prev.text()) {
        return false;
    }
    match source.get(prev.byte_range().end..next.byte_range().start) {
        Some(gap) => gap.trim().is_empty() && gap.matches('\n').count() == 1,
        None => false,
    }
}

fn build_block(group: Vec<&SyntaxNode>) -> DocumentationComment {
    let xml = strip_markers(&group);
    let content = read_xml_fragment(&xml);
    DocumentationComment::new(group.into_iter().cloned().collect(), xml, content)
}

/// Comment text with `///`, `/**`, `*/` and leading `*` markers removed
fn strip_markers(group: &[&SyntaxNode]) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for comment in group {
        let text = comment.text();
        if let Some(line) = text.strip_prefix("///") {
            lines.push(line);
            continue;
        }
        let inner = text
            .strip_prefix("/**")
            .and_then(|rest| rest.strip_suffix("*/"))
            .unwrap_or(text);
        for (i, line) in inner.lines().enumerate() {
            if i == 0 {
                lines.push(line);
            } else {
                let trimmed = line.trim_start();
                lines.push(trimmed.strip_prefix('*').unwrap_or(trimmed));
            }
        }
    }
    lines.join("\n")
}
