/*
 * Codegraph Fragment - C# source fragments as typed syntax nodes
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, FragmentError) and tree-sitter helpers
 * - features/    : fragments (domain → ports → infrastructure → application)
 * - config/      : FragmentConfig (YAML loadable)
 *
 * Parsing itself is tree-sitter's job. This crate wraps a fragment so the
 * grammar's compilation-unit entry point can parse it, then narrows the result
 * to the requested node type.
 */

// Crate-level lint configuration
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration (documentation policy, size guard)
pub mod config;

/// Vertical slices
pub mod features;

/// Shared models and utilities
pub mod shared;

pub use config::{ConfigError, DocumentationLinePolicy, FragmentConfig};
pub use features::fragments::{
    ClassDeclaration, CompilationUnit, ConstructorDeclaration, DocumentationComment,
    EnumDeclaration, Expression, ExpressionStatement, FieldDeclaration, FragmentParser,
    InterfaceDeclaration, LocalDeclarationStatement, MemberDeclaration, MethodDeclaration,
    Parameter, PropertyDeclaration, RecordDeclaration, ReturnStatement, Statement,
    StructDeclaration, SyntaxNode, SyntaxParser, SyntaxTree, TypeSyntax, UsingDirective,
    XmlElement, XmlNode,
};
pub use shared::models::{FragmentError, Result, Span};

// ═══════════════════════════════════════════════════════════════════════════
// Free functions (default facade, default config)
// ═══════════════════════════════════════════════════════════════════════════
//
// Each builds a `FragmentParser::new()` per call. Hold a `FragmentParser` to
// reuse a non-default `FragmentConfig`.

/// Parse `text` as a whole file; never fails on malformed input
pub fn parse_compilation_unit(text: &str) -> Result<CompilationUnit> {
    FragmentParser::new().parse_compilation_unit(text)
}

/// Parse `text` as a class member of whatever kind
pub fn parse_member_declaration(text: &str) -> Result<Option<MemberDeclaration>> {
    FragmentParser::new().parse_member_declaration(text)
}

/// Class declaration, or `None` when `text` is some other member
pub fn parse_class(text: &str) -> Result<Option<ClassDeclaration>> {
    FragmentParser::new().parse_class(text)
}

/// Interface declaration, or `None` on a shape mismatch
pub fn parse_interface(text: &str) -> Result<Option<InterfaceDeclaration>> {
    FragmentParser::new().parse_interface(text)
}

/// Struct declaration, or `None` on a shape mismatch
pub fn parse_struct(text: &str) -> Result<Option<StructDeclaration>> {
    FragmentParser::new().parse_struct(text)
}

/// Enum declaration, or `None` on a shape mismatch
pub fn parse_enum(text: &str) -> Result<Option<EnumDeclaration>> {
    FragmentParser::new().parse_enum(text)
}

/// Record declaration, or `None` on a shape mismatch
pub fn parse_record(text: &str) -> Result<Option<RecordDeclaration>> {
    FragmentParser::new().parse_record(text)
}

/// Method declaration; the node text is `text` trimmed, nothing inserted
pub fn parse_method(text: &str) -> Result<Option<MethodDeclaration>> {
    FragmentParser::new().parse_method(text)
}

/// Constructor declaration, or `None` on a shape mismatch
pub fn parse_constructor(text: &str) -> Result<Option<ConstructorDeclaration>> {
    FragmentParser::new().parse_constructor(text)
}

/// Property declaration, or `None` on a shape mismatch
pub fn parse_property(text: &str) -> Result<Option<PropertyDeclaration>> {
    FragmentParser::new().parse_property(text)
}

/// Field declaration, or `None` on a shape mismatch
pub fn parse_field(text: &str) -> Result<Option<FieldDeclaration>> {
    FragmentParser::new().parse_field(text)
}

/// First statement of `text`; `EmptyFragment` when there is none
pub fn parse_statement(text: &str) -> Result<Statement> {
    FragmentParser::new().parse_statement(text)
}

/// Lazy: each item is parsed when the iterator reaches it
pub fn parse_statements<I>(texts: I) -> impl Iterator<Item = Result<Statement>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let parser = FragmentParser::new();
    texts
        .into_iter()
        .map(move |text| parser.parse_statement(text.as_ref()))
}

/// Every statement of one multi-statement fragment, in source order
pub fn parse_statements_from_block(text: &str) -> Result<impl ExactSizeIterator<Item = Statement>> {
    FragmentParser::new().parse_statements_from_block(text)
}

/// Return statement, or `None` when the first statement is something else
pub fn parse_return_statement(text: &str) -> Result<Option<ReturnStatement>> {
    FragmentParser::new().parse_return_statement(text)
}

/// Exactly one parameter, otherwise `CardinalityViolation`
pub fn parse_parameter(text: &str) -> Result<Parameter> {
    FragmentParser::new().parse_parameter(text)
}

/// Parameter list fragment (`int a, params string[] rest`)
pub fn parse_parameter_list(text: &str) -> Result<Vec<Parameter>> {
    FragmentParser::new().parse_parameter_list(text)
}

/// Exactly one using directive, otherwise `CardinalityViolation`
pub fn parse_using_directive(text: &str) -> Result<UsingDirective> {
    FragmentParser::new().parse_using_directive(text)
}

/// Exactly one documentation block, otherwise `CardinalityViolation`
pub fn parse_documentation(text: &str) -> Result<DocumentationComment> {
    FragmentParser::new().parse_documentation(text)
}

/// Content nodes of the first documentation block in `text`
pub fn parse_documentation_line(text: &str) -> Result<Vec<XmlNode>> {
    FragmentParser::new().parse_documentation_line(text)
}

/// Expression filling the whole fragment; trailing tokens give `EmptyFragment`
pub fn parse_expression(text: &str) -> Result<Expression> {
    FragmentParser::new().parse_expression(text)
}

/// Type filling the whole fragment; trailing tokens give `EmptyFragment`
pub fn parse_type_name(text: &str) -> Result<TypeSyntax> {
    FragmentParser::new().parse_type_name(text)
}
