//! Fragment parser facade
//!
//! One operation per syntactic category. Every operation is a single call to
//! the `SyntaxParser` port followed by a narrowing step:
//!
//! - category parsers (`parse_class`, `parse_method`, ...) narrow with a
//!   pattern match and return `Ok(None)` on a shape mismatch;
//! - `parse_parameter`, `parse_using_directive` and `parse_documentation`
//!   require exactly one match and fail with `CardinalityViolation` otherwise.
//!
//! The facade holds no state besides its configuration and can be shared
//! freely between threads.

use tracing::debug;

use crate::config::{DocumentationLinePolicy, FragmentConfig};
use crate::features::fragments::domain::{
    ClassDeclaration, CompilationUnit, ConstructorDeclaration, DocumentationComment,
    EnumDeclaration, Expression, FieldDeclaration, InterfaceDeclaration, MemberDeclaration,
    MethodDeclaration, Parameter, PropertyDeclaration, RecordDeclaration, ReturnStatement,
    Statement, StructDeclaration, TypeSyntax, UsingDirective, XmlNode,
};
use crate::features::fragments::infrastructure::{documentation_blocks, TreeSitterCSharpParser};
use crate::features::fragments::ports::SyntaxParser;
use crate::shared::models::{FragmentError, Result};
use crate::shared::utils::exactly_one;

/// Text-fragment-to-syntax-node facade
#[derive(Debug, Clone, Default)]
pub struct FragmentParser<P = TreeSitterCSharpParser> {
    parser: P,
    config: FragmentConfig,
}

impl FragmentParser<TreeSitterCSharpParser> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FragmentConfig) -> Self {
        Self {
            parser: TreeSitterCSharpParser::new(),
            config,
        }
    }
}

impl<P: SyntaxParser> FragmentParser<P> {
    pub fn with_parser(parser: P, config: FragmentConfig) -> Self {
        Self { parser, config }
    }

    pub fn config(&self) -> &FragmentConfig {
        &self.config
    }

    fn check_size(&self, text: &str) -> Result<()> {
        match self.config.max_fragment_bytes {
            Some(limit) if text.len() > limit => Err(FragmentError::FragmentTooLarge {
                len: text.len(),
                limit,
            }),
            _ => Ok(()),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Whole files
    // ═══════════════════════════════════════════════════════════════════════

    /// Parse as a top-level unit; always yields a node
    pub fn parse_compilation_unit(&self, text: &str) -> Result<CompilationUnit> {
        self.check_size(text)?;
        self.parser.parse_as_top_level_unit(text)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Member declarations
    // ═══════════════════════════════════════════════════════════════════════

    /// Parse as a class member, whatever kind it turns out to be
    pub fn parse_member_declaration(&self, text: &str) -> Result<Option<MemberDeclaration>> {
        self.check_size(text)?;
        self.parser.parse_as_member_declaration(text)
    }

    fn parse_member_as<T>(
        &self,
        text: &str,
        narrow: impl FnOnce(MemberDeclaration) -> Option<T>,
    ) -> Result<Option<T>> {
        Ok(self.parse_member_declaration(text)?.and_then(narrow))
    }

    pub fn parse_class(&self, text: &str) -> Result<Option<ClassDeclaration>> {
        self.parse_member_as(text, MemberDeclaration::into_class)
    }

    pub fn parse_interface(&self, text: &str) -> Result<Option<InterfaceDeclaration>> {
        self.parse_member_as(text, MemberDeclaration::into_interface)
    }

    pub fn parse_struct(&self, text: &str) -> Result<Option<StructDeclaration>> {
        self.parse_member_as(text, MemberDeclaration::into_struct)
    }

    pub fn parse_enum(&self, text: &str) -> Result<Option<EnumDeclaration>> {
        self.parse_member_as(text, MemberDeclaration::into_enum)
    }

    pub fn parse_record(&self, text: &str) -> Result<Option<RecordDeclaration>> {
        self.parse_member_as(text, MemberDeclaration::into_record)
    }

    /// Parse a method declaration.
    ///
    /// The node text is exactly the declaration as written; no newline is
    /// inserted after the body's opening brace.
    pub fn parse_method(&self, text: &str) -> Result<Option<MethodDeclaration>> {
        self.parse_member_as(text, MemberDeclaration::into_method)
    }

    pub fn parse_constructor(&self, text: &str) -> Result<Option<ConstructorDeclaration>> {
        self.parse_member_as(text, MemberDeclaration::into_constructor)
    }

    pub fn parse_property(&self, text: &str) -> Result<Option<PropertyDeclaration>> {
        self.parse_member_as(text, MemberDeclaration::into_property)
    }

    pub fn parse_field(&self, text: &str) -> Result<Option<FieldDeclaration>> {
        self.parse_member_as(text, MemberDeclaration::into_field)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Statements
    // ═══════════════════════════════════════════════════════════════════════

    /// Parse the first statement of `text`
    pub fn parse_statement(&self, text: &str) -> Result<Statement> {
        self.check_size(text)?;
        self.parser.parse_as_statement(text)
    }

    pub fn parse_return_statement(&self, text: &str) -> Result<Option<ReturnStatement>> {
        Ok(self.parse_statement(text)?.into_return())
    }

    /// Parse each item as one statement, lazily and in input order.
    ///
    /// A failing item surfaces as an `Err` at its own position;
    /// `collect::<Result<Vec<_>>>()` stops at the first one.
    pub fn parse_statements<'a, I>(
        &'a self,
        texts: I,
    ) -> impl Iterator<Item = Result<Statement>> + 'a
    where
        I: IntoIterator + 'a,
        I::Item: AsRef<str>,
        I::IntoIter: 'a,
    {
        texts
            .into_iter()
            .map(move |text| self.parse_statement(text.as_ref()))
    }

    /// Parse one fragment holding several statements, in source order
    pub fn parse_statements_from_block(
        &self,
        text: &str,
    ) -> Result<impl ExactSizeIterator<Item = Statement>> {
        self.check_size(text)?;
        Ok(self.parser.parse_as_statements(text)?.into_iter())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Parameters, directives, expressions, types
    // ═══════════════════════════════════════════════════════════════════════

    /// Parse a parameter list fragment (`int a, string b`) as-is
    pub fn parse_parameter_list(&self, text: &str) -> Result<Vec<Parameter>> {
        self.check_size(text)?;
        self.parser.parse_as_parameter_list(text)
    }

    /// Parse exactly one parameter
    pub fn parse_parameter(&self, text: &str) -> Result<Parameter> {
        let parameters = self.parse_parameter_list(text)?;
        exactly_one(parameters, "parameter").inspect_err(|e| debug!("parse_parameter: {}", e))
    }

    /// Parse a compilation unit holding exactly one using directive
    pub fn parse_using_directive(&self, text: &str) -> Result<UsingDirective> {
        let unit = self.parse_compilation_unit(text)?;
        exactly_one(unit.usings(), "using directive")
            .inspect_err(|e| debug!("parse_using_directive: {}", e))
    }

    pub fn parse_expression(&self, text: &str) -> Result<Expression> {
        self.check_size(text)?;
        self.parser.parse_as_expression(text)
    }

    pub fn parse_type_name(&self, text: &str) -> Result<TypeSyntax> {
        self.check_size(text)?;
        self.parser.parse_as_type(text)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Documentation
    // ═══════════════════════════════════════════════════════════════════════

    fn documentation_blocks(&self, text: &str) -> Result<Vec<DocumentationComment>> {
        self.check_size(text)?;
        let tree = self.parser.parse_as_syntax_tree(text)?;
        Ok(documentation_blocks(&tree))
    }

    /// Parse text holding exactly one documentation block
    pub fn parse_documentation(&self, text: &str) -> Result<DocumentationComment> {
        exactly_one(self.documentation_blocks(text)?, "documentation comment")
            .inspect_err(|e| debug!("parse_documentation: {}", e))
    }

    /// Content nodes of the documentation block in `text`.
    ///
    /// Under the default `DocumentationLinePolicy::First`, later blocks are
    /// ignored; with no block at all this is a `CardinalityViolation`.
    pub fn parse_documentation_line(&self, text: &str) -> Result<Vec<XmlNode>> {
        let blocks = self.documentation_blocks(text)?;
        let block = match self.config.documentation_line_policy {
            DocumentationLinePolicy::First => blocks
                .into_iter()
                .next()
                .ok_or_else(|| FragmentError::cardinality("documentation comment", 0))?,
            DocumentationLinePolicy::ExactlyOne => exactly_one(blocks, "documentation comment")?,
        };
        Ok(block.into_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fragments::domain::SyntaxTree;

    /// Port stub that never finds anything
    struct EmptyParser;

    impl SyntaxParser for EmptyParser {
        fn parse_as_top_level_unit(&self, text: &str) -> Result<CompilationUnit> {
            TreeSitterCSharpParser::new().parse_as_top_level_unit(text)
        }

        fn parse_as_member_declaration(&self, _text: &str) -> Result<Option<MemberDeclaration>> {
            Ok(None)
        }

        fn parse_as_statements(&self, _text: &str) -> Result<Vec<Statement>> {
            Ok(Vec::new())
        }

        fn parse_as_parameter_list(&self, _text: &str) -> Result<Vec<Parameter>> {
            Ok(Vec::new())
        }

        fn parse_as_syntax_tree(&self, text: &str) -> Result<SyntaxTree> {
            TreeSitterCSharpParser::new().parse_as_syntax_tree(text)
        }

        fn parse_as_expression(&self, _text: &str) -> Result<Expression> {
            Err(FragmentError::empty("expression"))
        }

        fn parse_as_type(&self, _text: &str) -> Result<TypeSyntax> {
            Err(FragmentError::empty("type"))
        }

        fn language_name(&self) -> &'static str {
            "empty"
        }
    }

    #[test]
    fn test_facade_over_custom_port() {
        let facade = FragmentParser::with_parser(EmptyParser, FragmentConfig::default());

        assert!(facade.parse_class("class C { }").unwrap().is_none());
        assert!(facade.parse_statement("a();").is_err());
        let err = facade.parse_parameter("int x").unwrap_err();
        assert!(matches!(
            err,
            FragmentError::CardinalityViolation { found: 0, .. }
        ));
    }

    #[test]
    fn test_size_guard() {
        let facade = FragmentParser::with_config(FragmentConfig::default().with_max_fragment_bytes(8));

        assert!(facade.parse_statement("a();").is_ok());
        let err = facade.parse_statement("someLongCall();").unwrap_err();
        assert!(matches!(
            err,
            FragmentError::FragmentTooLarge { len: 15, limit: 8 }
        ));
    }

    #[test]
    fn test_documentation_line_policy_exactly_one() {
        let source = "/// <a/>\nclass A { }\n/// <b/>\nclass B { }";

        let lenient = FragmentParser::new();
        let nodes = lenient.parse_documentation_line(source).unwrap();
        assert_eq!(nodes[1].as_element().map(|e| e.name.as_str()), Some("a"));

        let strict = FragmentParser::with_config(
            FragmentConfig::default()
                .with_documentation_line_policy(DocumentationLinePolicy::ExactlyOne),
        );
        let err = strict.parse_documentation_line(source).unwrap_err();
        assert!(matches!(
            err,
            FragmentError::CardinalityViolation { found: 2, .. }
        ));
    }

    #[test]
    fn test_facade_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FragmentParser>();
    }
}
