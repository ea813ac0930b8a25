//! Syntax parser port (interface)
//!
//! The entry points the facade needs from the underlying parsing library.
//! Each one parses a fragment as if it stood in a particular syntactic
//! position and hands back the node found there, without narrowing it.

use crate::features::fragments::domain::{
    CompilationUnit, Expression, MemberDeclaration, Parameter, Statement, SyntaxTree, TypeSyntax,
};
use crate::shared::models::{FragmentError, Result};

/// Parser trait - abstraction over the parsing library
pub trait SyntaxParser: Send + Sync {
    /// Parse as a whole file
    fn parse_as_top_level_unit(&self, text: &str) -> Result<CompilationUnit>;

    /// Parse as a class member; `None` when the fragment holds no member at all
    fn parse_as_member_declaration(&self, text: &str) -> Result<Option<MemberDeclaration>>;

    /// Parse as a sequence of statements inside a method body
    fn parse_as_statements(&self, text: &str) -> Result<Vec<Statement>>;

    /// Parse as the first statement of a method body
    fn parse_as_statement(&self, text: &str) -> Result<Statement> {
        self.parse_as_statements(text)?
            .into_iter()
            .next()
            .ok_or_else(|| FragmentError::empty("statement"))
    }

    /// Parse as the contents of a parameter list (without parentheses)
    fn parse_as_parameter_list(&self, text: &str) -> Result<Vec<Parameter>>;

    /// Parse as a whole file, keeping trivia reachable from the root
    fn parse_as_syntax_tree(&self, text: &str) -> Result<SyntaxTree>;

    /// Parse as an expression
    fn parse_as_expression(&self, text: &str) -> Result<Expression>;

    /// Parse as a type reference
    fn parse_as_type(&self, text: &str) -> Result<TypeSyntax>;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
