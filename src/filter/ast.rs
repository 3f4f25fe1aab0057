// Copyright (c) 2026 - The scm-inventory Authors
//! Filter expression AST

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Neq,
}

/// One side of a comparison or membership test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Quoted string literal
    Literal(String),
    /// Named attribute of the host under evaluation
    Attr(String),
}

/// Boolean filter expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Bool(bool),
    Cmp {
        lhs: Operand,
        op: CmpOp,
        rhs: Operand,
    },
    /// Membership test: `needle` appears in the list-valued `list`.
    /// Both `'x' in xs` and `xs contains 'x'` parse to this node.
    In {
        needle: Operand,
        list: Operand,
    },
    Not(Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
}
