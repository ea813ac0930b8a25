//! Fragment application layer (parser facade)

mod fragment_parser;

pub use fragment_parser::FragmentParser;
