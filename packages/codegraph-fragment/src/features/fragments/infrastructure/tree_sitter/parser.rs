//! Tree-sitter parser implementation
//!
//! This is where tree-sitter dependency lives.

use tracing::debug;
use tree_sitter::{Node, Parser as TSParser, Tree};

use super::scaffold::{Scaffold, ScaffoldedTree};
use crate::features::fragments::domain::{
    CompilationUnit, Expression, MemberDeclaration, Parameter, Statement, SyntaxTree, TypeSyntax,
};
use crate::features::fragments::ports::SyntaxParser;
use crate::shared::models::{FragmentError, Result};
use crate::shared::utils::tree_sitter::{find_child_by_kind, member_children};

/// Tree-sitter based C# parser
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSitterCSharpParser;

impl TreeSitterCSharpParser {
    pub fn new() -> Self {
        Self
    }

    /// Get the tree-sitter language
    fn get_ts_language(&self) -> tree_sitter::Language {
        tree_sitter_c_sharp::language()
    }

    fn parse_source(&self, source: &str) -> Result<Tree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| FragmentError::language(e.to_string()))?;

        parser.parse(source, None).ok_or(FragmentError::ParseAborted)
    }

    fn parse_scaffolded(&self, scaffold: Scaffold, text: &str) -> Result<ScaffoldedTree> {
        debug!(
            "Parsing C# fragment as {} ({} bytes)",
            scaffold.category(),
            text.len()
        );
        let tree = self.parse_source(&scaffold.wrap(text))?;
        Ok(ScaffoldedTree::new(tree, scaffold, text))
    }
}

/// `declaration_list` of the scaffold class
fn scaffold_body<'t>(root: Node<'t>) -> Option<Node<'t>> {
    let class = find_child_by_kind(&root, "class_declaration")?;
    class
        .child_by_field_name("body")
        .or_else(|| find_child_by_kind(&class, "declaration_list"))
}

/// The scaffold's `__Body` method
fn scaffold_method<'t>(root: Node<'t>) -> Option<Node<'t>> {
    let body = scaffold_body(root)?;
    find_child_by_kind(&body, "method_declaration")
}

/// `variable_declaration` of the scaffold's `__value` field
fn scaffold_variable<'t>(root: Node<'t>) -> Option<Node<'t>> {
    let body = scaffold_body(root)?;
    let field = find_child_by_kind(&body, "field_declaration")?;
    find_child_by_kind(&field, "variable_declaration")
}

/// Initializer of `__value`: where an expression fragment must land
fn scaffold_value<'t>(root: Node<'t>) -> Option<Node<'t>> {
    let declarator = find_child_by_kind(&scaffold_variable(root)?, "variable_declarator")?;
    if let Some(clause) = find_child_by_kind(&declarator, "equals_value_clause") {
        return clause.named_child(0);
    }
    let mut cursor = declarator.walk();
    let mut after_equals = false;
    for child in declarator.children(&mut cursor) {
        if after_equals && child.is_named() && !child.is_extra() {
            return Some(child);
        }
        after_equals |= child.kind() == "=";
    }
    None
}

/// Declared type of `__value`: where a type fragment must land
fn scaffold_type<'t>(root: Node<'t>) -> Option<Node<'t>> {
    scaffold_variable(root)?.child_by_field_name("type")
}

impl SyntaxParser for TreeSitterCSharpParser {
    fn parse_as_top_level_unit(&self, text: &str) -> Result<CompilationUnit> {
        let tree = self.parse_as_syntax_tree(text)?;
        Ok(CompilationUnit::from_root(tree.into_root()))
    }

    fn parse_as_member_declaration(&self, text: &str) -> Result<Option<MemberDeclaration>> {
        let parsed = self.parse_scaffolded(Scaffold::Member, text)?;
        let member = scaffold_body(parsed.tree.root_node())
            .and_then(|body| member_children(&body).into_iter().next())
            .map(|node| MemberDeclaration::from_syntax(parsed.lift(node)));
        Ok(member)
    }

    fn parse_as_statements(&self, text: &str) -> Result<Vec<Statement>> {
        let parsed = self.parse_scaffolded(Scaffold::Statements, text)?;
        let Some(block) = scaffold_method(parsed.tree.root_node()).and_then(|method| {
            method
                .child_by_field_name("body")
                .or_else(|| find_child_by_kind(&method, "block"))
        }) else {
            return Ok(Vec::new());
        };

        Ok(member_children(&block)
            .into_iter()
            .map(|node| Statement::from_syntax(parsed.lift(node)))
            .collect())
    }

    fn parse_as_parameter_list(&self, text: &str) -> Result<Vec<Parameter>> {
        let parsed = self.parse_scaffolded(Scaffold::Parameters, text)?;
        let Some(list) = scaffold_method(parsed.tree.root_node()).and_then(|method| {
            method
                .child_by_field_name("parameters")
                .or_else(|| find_child_by_kind(&method, "parameter_list"))
        }) else {
            return Ok(Vec::new());
        };

        Ok(Parameter::from_list(&parsed.lift(list)))
    }

    fn parse_as_syntax_tree(&self, text: &str) -> Result<SyntaxTree> {
        let parsed = self.parse_scaffolded(Scaffold::File, text)?;
        Ok(SyntaxTree::new(parsed.lift(parsed.tree.root_node())))
    }

    fn parse_as_expression(&self, text: &str) -> Result<Expression> {
        let parsed = self.parse_scaffolded(Scaffold::Expression, text)?;
        let node = scaffold_value(parsed.tree.root_node())
            .and_then(|slot| parsed.fragment_node_within(slot))
            .ok_or_else(|| FragmentError::empty(Scaffold::Expression.category()))?;
        Ok(Expression::from_syntax(parsed.lift(node)))
    }

    fn parse_as_type(&self, text: &str) -> Result<TypeSyntax> {
        let parsed = self.parse_scaffolded(Scaffold::Type, text)?;
        let node = scaffold_type(parsed.tree.root_node())
            .and_then(|slot| parsed.fragment_node_within(slot))
            .ok_or_else(|| FragmentError::empty(Scaffold::Type.category()))?;
        Ok(TypeSyntax::from_syntax(parsed.lift(node)))
    }

    fn language_name(&self) -> &'static str {
        "csharp"
    }
}
