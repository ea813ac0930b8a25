//! Member and type declarations
//!
//! `MemberDeclaration` is the tagged union produced by member-level parsing;
//! the category-specific parsers narrow it with `into_*`, which yields `None`
//! on a shape mismatch.

use super::nodes::Parameter;
use super::statements::Statement;
use super::syntax_node::SyntaxNode;
use super::typed::{declared_name, modifiers};

typed_node!(
    /// `class Foo : Bar { ... }`
    ClassDeclaration => "class_declaration"
);
typed_node!(
    /// `interface IFoo { ... }`
    InterfaceDeclaration => "interface_declaration"
);
typed_node!(StructDeclaration => "struct_declaration");
typed_node!(EnumDeclaration => "enum_declaration");
typed_node!(
    /// `record Point(int X, int Y);` and `record struct`
    RecordDeclaration => "record_declaration" | "record_struct_declaration"
);
typed_node!(MethodDeclaration => "method_declaration");
typed_node!(ConstructorDeclaration => "constructor_declaration");
typed_node!(PropertyDeclaration => "property_declaration");
typed_node!(
    /// `private int _a, _b;`
    FieldDeclaration => "field_declaration"
);

/// Accessors shared by every declaration that owns a `declaration_list` body
macro_rules! type_declaration_accessors {
    ($($name:ident),+) => {
        $(
            impl $name {
                pub fn name(&self) -> Option<&str> {
                    declared_name(&self.0)
                }

                pub fn modifiers(&self) -> Vec<&str> {
                    modifiers(&self.0)
                }

                pub fn body(&self) -> Option<&SyntaxNode> {
                    self.0
                        .child_by_field("body")
                        .or_else(|| self.0.find_child("declaration_list"))
                }

                /// Base class and implemented interfaces, as written
                pub fn base_types(&self) -> Vec<&str> {
                    self.0
                        .find_child("base_list")
                        .map(|bases| bases.named_children().map(SyntaxNode::text).collect())
                        .unwrap_or_default()
                }

                /// Nested member declarations in source order
                pub fn members(&self) -> Vec<MemberDeclaration> {
                    self.body()
                        .map(|body| {
                            body.named_children()
                                .cloned()
                                .map(MemberDeclaration::from_syntax)
                                .collect()
                        })
                        .unwrap_or_default()
                }
            }
        )+
    };
}

type_declaration_accessors!(
    ClassDeclaration,
    InterfaceDeclaration,
    StructDeclaration,
    RecordDeclaration
);

impl EnumDeclaration {
    pub fn name(&self) -> Option<&str> {
        declared_name(&self.0)
    }

    pub fn modifiers(&self) -> Vec<&str> {
        modifiers(&self.0)
    }

    /// Enum member names in declaration order
    pub fn member_names(&self) -> Vec<&str> {
        self.0
            .first_descendant("enum_member_declaration_list")
            .map(|list| {
                list.find_children("enum_member_declaration")
                    .into_iter()
                    .filter_map(declared_name)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Parameters listed in a direct `parameter_list` child
fn parameters_of(node: &SyntaxNode) -> Vec<Parameter> {
    node.child_by_field("parameters")
        .or_else(|| node.find_child("parameter_list"))
        .map(Parameter::from_list)
        .unwrap_or_default()
}

/// Block or arrow-expression body
fn body_of(node: &SyntaxNode) -> Option<&SyntaxNode> {
    node.child_by_field("body")
        .or_else(|| node.find_child("block"))
        .or_else(|| node.find_child("arrow_expression_clause"))
}

impl MethodDeclaration {
    pub fn name(&self) -> Option<&str> {
        declared_name(&self.0)
    }

    pub fn modifiers(&self) -> Vec<&str> {
        modifiers(&self.0)
    }

    pub fn return_type(&self) -> Option<&str> {
        self.0
            .child_by_field("returns")
            .or_else(|| self.0.child_by_field("type"))
            .map(SyntaxNode::text)
    }

    pub fn parameters(&self) -> Vec<Parameter> {
        parameters_of(&self.0)
    }

    pub fn body(&self) -> Option<&SyntaxNode> {
        body_of(&self.0)
    }

    /// Statements of a block body; empty for expression-bodied or abstract methods
    pub fn statements(&self) -> Vec<Statement> {
        match self.body() {
            Some(body) if body.kind() == "block" => body
                .named_children()
                .cloned()
                .map(Statement::from_syntax)
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl ConstructorDeclaration {
    pub fn name(&self) -> Option<&str> {
        declared_name(&self.0)
    }

    pub fn modifiers(&self) -> Vec<&str> {
        modifiers(&self.0)
    }

    pub fn parameters(&self) -> Vec<Parameter> {
        parameters_of(&self.0)
    }

    pub fn body(&self) -> Option<&SyntaxNode> {
        body_of(&self.0)
    }
}

const ACCESSOR_KEYWORDS: &[&str] = &["get", "set", "init", "add", "remove"];

impl PropertyDeclaration {
    pub fn name(&self) -> Option<&str> {
        declared_name(&self.0)
    }

    pub fn modifiers(&self) -> Vec<&str> {
        modifiers(&self.0)
    }

    pub fn property_type(&self) -> Option<&str> {
        self.0.child_by_field("type").map(SyntaxNode::text)
    }

    /// Accessor keywords (`get`, `set`, `init`) in declaration order
    pub fn accessors(&self) -> Vec<&str> {
        let Some(list) = self.0.find_child("accessor_list") else {
            return Vec::new();
        };
        list.find_children("accessor_declaration")
            .into_iter()
            .filter_map(|accessor| {
                accessor
                    .children()
                    .iter()
                    .map(SyntaxNode::text)
                    .find(|text| ACCESSOR_KEYWORDS.iter().any(|k| k == text))
            })
            .collect()
    }
}

impl FieldDeclaration {
    pub fn modifiers(&self) -> Vec<&str> {
        modifiers(&self.0)
    }

    pub fn field_type(&self) -> Option<&str> {
        self.0
            .find_child("variable_declaration")
            .and_then(|decl| decl.child_by_field("type"))
            .map(SyntaxNode::text)
    }

    /// Declared variable names (`int a, b;` has two)
    pub fn names(&self) -> Vec<&str> {
        self.0
            .find_child("variable_declaration")
            .map(|decl| {
                decl.find_children("variable_declarator")
                    .into_iter()
                    .filter_map(declared_name)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Any member declaration, narrowed by pattern match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDeclaration {
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    Struct(StructDeclaration),
    Enum(EnumDeclaration),
    Record(RecordDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
    Property(PropertyDeclaration),
    Field(FieldDeclaration),
    /// Events, indexers, operators, ERROR nodes, ...
    Other(SyntaxNode),
}

macro_rules! narrowing {
    ($($variant:ident($ty:ident) => $into:ident, $as:ident;)+) => {
        $(
            pub fn $into(self) -> Option<$ty> {
                match self {
                    MemberDeclaration::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            pub fn $as(&self) -> Option<&$ty> {
                match self {
                    MemberDeclaration::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        )+
    };
}

impl MemberDeclaration {
    pub fn from_syntax(node: SyntaxNode) -> Self {
        let kind = node.kind();
        if ClassDeclaration::can_cast(kind) {
            MemberDeclaration::Class(ClassDeclaration(node))
        } else if InterfaceDeclaration::can_cast(kind) {
            MemberDeclaration::Interface(InterfaceDeclaration(node))
        } else if StructDeclaration::can_cast(kind) {
            MemberDeclaration::Struct(StructDeclaration(node))
        } else if EnumDeclaration::can_cast(kind) {
            MemberDeclaration::Enum(EnumDeclaration(node))
        } else if RecordDeclaration::can_cast(kind) {
            MemberDeclaration::Record(RecordDeclaration(node))
        } else if MethodDeclaration::can_cast(kind) {
            MemberDeclaration::Method(MethodDeclaration(node))
        } else if ConstructorDeclaration::can_cast(kind) {
            MemberDeclaration::Constructor(ConstructorDeclaration(node))
        } else if PropertyDeclaration::can_cast(kind) {
            MemberDeclaration::Property(PropertyDeclaration(node))
        } else if FieldDeclaration::can_cast(kind) {
            MemberDeclaration::Field(FieldDeclaration(node))
        } else {
            MemberDeclaration::Other(node)
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            MemberDeclaration::Class(n) => n.syntax(),
            MemberDeclaration::Interface(n) => n.syntax(),
            MemberDeclaration::Struct(n) => n.syntax(),
            MemberDeclaration::Enum(n) => n.syntax(),
            MemberDeclaration::Record(n) => n.syntax(),
            MemberDeclaration::Method(n) => n.syntax(),
            MemberDeclaration::Constructor(n) => n.syntax(),
            MemberDeclaration::Property(n) => n.syntax(),
            MemberDeclaration::Field(n) => n.syntax(),
            MemberDeclaration::Other(n) => n,
        }
    }

    pub fn into_syntax(self) -> SyntaxNode {
        match self {
            MemberDeclaration::Class(n) => n.into_syntax(),
            MemberDeclaration::Interface(n) => n.into_syntax(),
            MemberDeclaration::Struct(n) => n.into_syntax(),
            MemberDeclaration::Enum(n) => n.into_syntax(),
            MemberDeclaration::Record(n) => n.into_syntax(),
            MemberDeclaration::Method(n) => n.into_syntax(),
            MemberDeclaration::Constructor(n) => n.into_syntax(),
            MemberDeclaration::Property(n) => n.into_syntax(),
            MemberDeclaration::Field(n) => n.into_syntax(),
            MemberDeclaration::Other(n) => n,
        }
    }

    pub fn text(&self) -> &str {
        self.syntax().text()
    }

    /// Declared name, where the member has exactly one
    pub fn name(&self) -> Option<&str> {
        match self {
            MemberDeclaration::Field(_) | MemberDeclaration::Other(_) => None,
            other => declared_name(other.syntax()),
        }
    }

    narrowing! {
        Class(ClassDeclaration) => into_class, as_class;
        Interface(InterfaceDeclaration) => into_interface, as_interface;
        Struct(StructDeclaration) => into_struct, as_struct;
        Enum(EnumDeclaration) => into_enum, as_enum;
        Record(RecordDeclaration) => into_record, as_record;
        Method(MethodDeclaration) => into_method, as_method;
        Constructor(ConstructorDeclaration) => into_constructor, as_constructor;
        Property(PropertyDeclaration) => into_property, as_property;
        Field(FieldDeclaration) => into_field, as_field;
    }
}

impl std::fmt::Display for MemberDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
