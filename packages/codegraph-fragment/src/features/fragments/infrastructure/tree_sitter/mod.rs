//! Tree-sitter adapter

mod parser;
mod scaffold;

pub use parser::TreeSitterCSharpParser;
pub use scaffold::Scaffold;
