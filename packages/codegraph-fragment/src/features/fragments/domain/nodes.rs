//! Compilation units, directives, parameters, expressions and types

use super::declarations::MemberDeclaration;
use super::syntax_node::SyntaxNode;

typed_node!(
    /// Whole-file parse result; tree-sitter always produces one
    CompilationUnit => "compilation_unit"
);
typed_node!(
    /// `using System.Linq;`, `using static Math;`, `using IO = System.IO;`
    UsingDirective => "using_directive"
);
typed_node!(
    /// `int x`, `ref Foo f`, `string s = ""`
    Parameter => "parameter" | "parameter_array"
);
typed_node!(Expression);
typed_node!(
    /// A type reference such as `List<int>` or `string[]`
    TypeSyntax
);

/// Keyword tokens a parameter may carry before its type
const PARAMETER_MODIFIERS: &[&str] = &["ref", "out", "in", "params", "this", "scoped"];

/// Kinds that can stand for a namespace or type name in a directive
const NAME_KINDS: &[&str] = &[
    "identifier",
    "qualified_name",
    "generic_name",
    "alias_qualified_name",
];

impl CompilationUnit {
    pub(crate) fn from_root(root: SyntaxNode) -> Self {
        Self(root)
    }

    /// Every using directive, including those inside namespaces
    pub fn usings(&self) -> Vec<UsingDirective> {
        self.0
            .find_descendants("using_directive")
            .into_iter()
            .cloned()
            .map(UsingDirective)
            .collect()
    }

    /// Top-level type and member declarations (namespaces excluded)
    pub fn members(&self) -> Vec<MemberDeclaration> {
        self.0
            .named_children()
            .filter(|c| c.kind().ends_with("_declaration") && !c.kind().contains("namespace"))
            .cloned()
            .map(MemberDeclaration::from_syntax)
            .collect()
    }

    pub fn has_error(&self) -> bool {
        self.0.has_error()
    }
}

impl UsingDirective {
    /// Imported namespace or type, as written (`System.Linq`)
    pub fn name(&self) -> Option<&str> {
        self.0
            .named_children()
            .filter(|c| NAME_KINDS.contains(&c.kind()))
            .last()
            .map(SyntaxNode::text)
    }

    /// Alias of `using Alias = Target;`
    pub fn alias(&self) -> Option<&str> {
        if let Some(name_equals) = self.0.find_child("name_equals") {
            return name_equals.named_children().next().map(SyntaxNode::text);
        }
        if !self.0.has_token("=") {
            return None;
        }
        self.0
            .child_by_field("alias")
            .or_else(|| self.0.find_child("identifier"))
            .map(SyntaxNode::text)
    }

    pub fn is_static(&self) -> bool {
        self.0.has_token("static")
    }

    pub fn is_global(&self) -> bool {
        self.0.has_token("global")
    }
}

impl Parameter {
    /// Parameters of a `parameter_list` node, in order.
    ///
    /// The grammar leaves `params T[] name` as loose tokens under the list;
    /// each such run becomes one `parameter_array` node.
    pub(crate) fn from_list(list: &SyntaxNode) -> Vec<Parameter> {
        let mut parameters = Vec::new();
        let mut loose: Vec<SyntaxNode> = Vec::new();

        for child in list.children() {
            if !loose.is_empty() {
                if matches!(child.kind(), "," | ")") {
                    parameters.extend(Self::from_loose(std::mem::take(&mut loose)));
                } else {
                    loose.push(child.clone());
                }
            } else if child.kind() == "params" && !child.is_named() {
                loose.push(child.clone());
            } else if let Some(parameter) = Self::cast(child.clone()) {
                parameters.push(parameter);
            }
        }
        parameters.extend(Self::from_loose(loose));
        parameters
    }

    fn from_loose(run: Vec<SyntaxNode>) -> Option<Parameter> {
        SyntaxNode::group("parameter_array", run).and_then(Self::cast)
    }

    pub fn name(&self) -> Option<&str> {
        self.name_node().map(SyntaxNode::text)
    }

    fn name_node(&self) -> Option<&SyntaxNode> {
        self.0.child_by_field("name").or_else(|| {
            self.0
                .named_children()
                .filter(|c| c.kind() == "identifier")
                .last()
        })
    }

    /// Declared type; `None` for implicitly typed lambda parameters
    pub fn parameter_type(&self) -> Option<&str> {
        if let Some(ty) = self.0.child_by_field("type") {
            return Some(ty.text());
        }
        let name = self.name_node()?;
        self.0
            .named_children()
            .take_while(|c| c.byte_range() != name.byte_range())
            .filter(|c| {
                !matches!(
                    c.kind(),
                    "attribute_list" | "parameter_modifier" | "modifier"
                )
            })
            .last()
            .map(SyntaxNode::text)
    }

    /// `ref`, `out`, `in`, `params`, `this`
    pub fn modifiers(&self) -> Vec<&str> {
        self.0
            .children()
            .iter()
            .filter(|c| {
                matches!(c.kind(), "parameter_modifier" | "modifier")
                    || (!c.is_named() && PARAMETER_MODIFIERS.contains(&c.kind()))
            })
            .map(SyntaxNode::text)
            .collect()
    }

    /// Default value expression of `int x = 5`
    pub fn default_value(&self) -> Option<&str> {
        if let Some(clause) = self.0.find_child("equals_value_clause") {
            return clause.named_children().next().map(SyntaxNode::text);
        }
        // Grammars without equals_value_clause inline `= value`
        self.0
            .children()
            .iter()
            .skip_while(|c| c.kind() != "=")
            .skip(1)
            .find(|c| c.is_named() && !c.is_extra())
            .map(SyntaxNode::text)
    }
}

impl Expression {
    /// Raw tree-sitter kind (`invocation_expression`, `identifier`, ...)
    pub fn kind(&self) -> &'static str {
        self.0.kind()
    }
}

impl TypeSyntax {
    pub fn kind(&self) -> &'static str {
        self.0.kind()
    }

    /// Type arguments of a generic name (`Dictionary<string, int>`)
    pub fn type_arguments(&self) -> Vec<&str> {
        self.0
            .first_descendant("type_argument_list")
            .map(|args| args.named_children().map(SyntaxNode::text).collect())
            .unwrap_or_default()
    }
}
