//! Fragment ports (interfaces)

mod syntax_parser;

pub use syntax_parser::SyntaxParser;
