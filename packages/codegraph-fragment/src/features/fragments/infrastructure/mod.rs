//! Fragment infrastructure (tree-sitter + quick-xml)

pub mod documentation;
pub mod tree_sitter;
pub mod xml;

pub use documentation::documentation_blocks;
pub use self::tree_sitter::TreeSitterCSharpParser;
pub use xml::read_xml_fragment;
