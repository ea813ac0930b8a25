//! Typed node wrappers
//!
//! Each C# syntactic category is a newtype over `SyntaxNode`. `cast` is the
//! only way in from an untyped node and checks the raw tree-sitter kind.

macro_rules! typed_node {
    (@common $(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name($crate::features::fragments::domain::SyntaxNode);

        impl $name {
            pub fn syntax(&self) -> &$crate::features::fragments::domain::SyntaxNode {
                &self.0
            }

            pub fn into_syntax(self) -> $crate::features::fragments::domain::SyntaxNode {
                self.0
            }

            pub fn text(&self) -> &str {
                self.0.text()
            }

            pub fn span(&self) -> $crate::shared::models::Span {
                self.0.span()
            }
        }

        impl AsRef<$crate::features::fragments::domain::SyntaxNode> for $name {
            fn as_ref(&self) -> &$crate::features::fragments::domain::SyntaxNode {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.0.text())
            }
        }
    };

    // Category identified by raw kind(s): checked `cast`
    ($(#[$meta:meta])* $name:ident => $($kind:literal)|+) => {
        typed_node!(@common $(#[$meta])* $name);

        impl $name {
            /// Raw tree-sitter kinds this category accepts
            pub const KINDS: &'static [&'static str] = &[$($kind),+];

            pub fn can_cast(kind: &str) -> bool {
                Self::KINDS.iter().any(|k| *k == kind)
            }

            pub fn cast(node: $crate::features::fragments::domain::SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }
        }
    };

    // Open-ended category (expressions, types): located by position instead
    ($(#[$meta:meta])* $name:ident) => {
        typed_node!(@common $(#[$meta])* $name);

        impl $name {
            pub(crate) fn from_syntax(node: $crate::features::fragments::domain::SyntaxNode) -> Self {
                Self(node)
            }
        }
    };
}

/// Declared name: the `name` field, else the first direct identifier
pub(crate) fn declared_name(node: &super::SyntaxNode) -> Option<&str> {
    node.child_by_field("name")
        .or_else(|| node.find_child("identifier"))
        .map(super::SyntaxNode::text)
}

/// Texts of direct `modifier` children (`public`, `static`, ...)
pub(crate) fn modifiers(node: &super::SyntaxNode) -> Vec<&str> {
    node.find_children("modifier")
        .into_iter()
        .map(super::SyntaxNode::text)
        .collect()
}
