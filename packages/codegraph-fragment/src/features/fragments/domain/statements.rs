//! Statements

use super::nodes::Expression;
use super::syntax_node::SyntaxNode;
use super::typed::declared_name;

typed_node!(
    /// `return x;` / `return;`
    ReturnStatement => "return_statement"
);
typed_node!(ExpressionStatement => "expression_statement");
typed_node!(
    /// `var x = 1;`
    LocalDeclarationStatement => "local_declaration_statement"
);

/// First named, non-extra child as an expression
fn inner_expression(node: &SyntaxNode) -> Option<Expression> {
    node.named_children()
        .next()
        .cloned()
        .map(Expression::from_syntax)
}

impl ReturnStatement {
    /// Returned expression; `None` for a bare `return;`
    pub fn expression(&self) -> Option<Expression> {
        inner_expression(&self.0)
    }
}

impl ExpressionStatement {
    pub fn expression(&self) -> Option<Expression> {
        inner_expression(&self.0)
    }
}

impl LocalDeclarationStatement {
    pub fn declared_type(&self) -> Option<&str> {
        self.0
            .find_child("variable_declaration")
            .and_then(|decl| decl.child_by_field("type"))
            .map(SyntaxNode::text)
    }

    pub fn declared_names(&self) -> Vec<&str> {
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

/// Any statement, narrowed by pattern match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    LocalDeclaration(LocalDeclarationStatement),
    /// `if`, loops, blocks, ERROR nodes, ...
    Other(SyntaxNode),
}

impl Statement {
    pub fn from_syntax(node: SyntaxNode) -> Self {
        match node.kind() {
            kind if ReturnStatement::can_cast(kind) => Statement::Return(ReturnStatement(node)),
            kind if ExpressionStatement::can_cast(kind) => {
                Statement::Expression(ExpressionStatement(node))
            }
            kind if LocalDeclarationStatement::can_cast(kind) => {
                Statement::LocalDeclaration(LocalDeclarationStatement(node))
            }
            _ => Statement::Other(node),
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Statement::Return(s) => s.syntax(),
            Statement::Expression(s) => s.syntax(),
            Statement::LocalDeclaration(s) => s.syntax(),
            Statement::Other(s) => s,
        }
    }

    pub fn into_syntax(self) -> SyntaxNode {
        match self {
            Statement::Return(s) => s.into_syntax(),
            Statement::Expression(s) => s.into_syntax(),
            Statement::LocalDeclaration(s) => s.into_syntax(),
            Statement::Other(s) => s,
        }
    }

    pub fn text(&self) -> &str {
        self.syntax().text()
    }

    /// Raw tree-sitter kind (`if_statement`, `return_statement`, ...)
    pub fn kind(&self) -> &'static str {
        self.syntax().kind()
    }

    pub fn into_return(self) -> Option<ReturnStatement> {
        match self {
            Statement::Return(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_return(&self) -> Option<&ReturnStatement> {
        match self {
            Statement::Return(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_expression(self) -> Option<ExpressionStatement> {
        match self {
            Statement::Expression(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_local_declaration(self) -> Option<LocalDeclarationStatement> {
        match self {
            Statement::LocalDeclaration(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
