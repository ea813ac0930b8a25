//! Property-based tests for fragment parsing
//!
//! Parsing the text of a parsed node must give back the same text, and the
//! node text is always the trimmed fragment.

use codegraph_fragment::FragmentParser;
use proptest::prelude::*;

// C# keywords are all lowercase, so a leading capital keeps clear of them
fn csharp_identifier() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,12}"
}

fn csharp_local() -> impl Strategy<Value = String> {
    "[A-Z0-9][a-zA-Z0-9]{0,8}".prop_map(|name| format!("local{name}"))
}

// Strategy for generating simple C# methods
fn csharp_method() -> impl Strategy<Value = String> {
    (csharp_identifier(), prop::collection::vec(csharp_local(), 0..4)).prop_map(
        |(name, params)| {
            let params: Vec<String> = params.iter().map(|p| format!("int {p}")).collect();
            format!(
                "public void {name}({})\n{{\n    Run();\n}}",
                params.join(", ")
            )
        },
    )
}

// Strategy for generating C# classes with a few fields
fn csharp_class() -> impl Strategy<Value = String> {
    (csharp_identifier(), 0..5usize).prop_map(|(name, field_count)| {
        let fields: String = (0..field_count)
            .map(|i| format!("    private int _field{i};\n"))
            .collect();
        format!("class {name}\n{{\n{fields}}}")
    })
}

// Strategy for generating single statements
fn csharp_statement() -> impl Strategy<Value = String> {
    prop_oneof![
        csharp_identifier().prop_map(|name| format!("{name}();")),
        (csharp_local(), 0..1000i32).prop_map(|(name, value)| format!("int {name} = {value};")),
        csharp_local().prop_map(|name| format!("return {name};")),
    ]
}

proptest! {
    /// Property: parse -> text -> parse -> text is stable for classes
    #[test]
    fn prop_class_text_idempotent(
        source in csharp_class(),
        padding in "[ \n]{0,3}"
    ) {
        let parser = FragmentParser::new();
        let padded = format!("{padding}{source}{padding}");

        let first = parser.parse_class(&padded).unwrap();
        prop_assert!(first.is_some(), "Expected a class for {:?}", padded);
        let first = first.unwrap();
        prop_assert_eq!(first.text(), source.as_str());

        let second = parser.parse_class(first.text()).unwrap().unwrap();
        prop_assert_eq!(second.text(), first.text());
        prop_assert_eq!(second.members().len(), first.members().len());
    }

    /// Property: method names and parameter counts survive a reparse
    #[test]
    fn prop_method_text_idempotent(source in csharp_method()) {
        let parser = FragmentParser::new();

        let first = parser.parse_method(&source).unwrap().unwrap();
        prop_assert_eq!(first.text(), source.as_str());

        let second = parser.parse_method(first.text()).unwrap().unwrap();
        prop_assert_eq!(second.text(), first.text());
        prop_assert_eq!(second.name(), first.name());
        prop_assert_eq!(second.parameters().len(), first.parameters().len());
    }

    /// Property: statements reparse to the same kind and text
    #[test]
    fn prop_statement_text_idempotent(source in csharp_statement()) {
        let parser = FragmentParser::new();

        let first = parser.parse_statement(&source).unwrap();
        prop_assert_eq!(first.text(), source.as_str());

        let second = parser.parse_statement(first.text()).unwrap();
        prop_assert_eq!(second.kind(), first.kind());
        prop_assert_eq!(second.text(), first.text());
    }

    /// Property: a block of statements yields one node per statement, in order
    #[test]
    fn prop_block_preserves_order(
        statements in prop::collection::vec(csharp_statement(), 1..6)
    ) {
        let parser = FragmentParser::new();
        let block = statements.join(" ");

        let parsed: Vec<String> = parser
            .parse_statements_from_block(&block)
            .unwrap()
            .map(|s| s.text().to_string())
            .collect();
        prop_assert_eq!(parsed, statements);
    }

    /// Property: the parser never panics on arbitrary input
    #[test]
    fn prop_never_panics(source in "\\PC{0,64}") {
        let parser = FragmentParser::new();
        let _ = parser.parse_member_declaration(&source);
        let _ = parser.parse_statement(&source);
        let _ = parser.parse_parameter_list(&source);
        let _ = parser.parse_documentation(&source);
    }
}
