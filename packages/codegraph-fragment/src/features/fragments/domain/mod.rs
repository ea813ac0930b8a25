//! Fragment domain models

#[macro_use]
mod typed;

mod declarations;
mod documentation;
mod nodes;
mod statements;
mod syntax_node;

pub use declarations::{
    ClassDeclaration, ConstructorDeclaration, EnumDeclaration, FieldDeclaration,
    InterfaceDeclaration, MemberDeclaration, MethodDeclaration, PropertyDeclaration,
    RecordDeclaration, StructDeclaration,
};
pub use documentation::{DocumentationComment, XmlElement, XmlNode};
pub use nodes::{CompilationUnit, Expression, Parameter, TypeSyntax, UsingDirective};
pub use statements::{
    ExpressionStatement, LocalDeclarationStatement, ReturnStatement, Statement,
};
pub use syntax_node::{Descendants, SyntaxNode, SyntaxTree};
