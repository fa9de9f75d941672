//! Expression nodes and operator enums.
//!
//! Child expressions are referenced by [`ExprId`] into an
//! [`ExprArena`](crate::ExprArena); variable-length children
//! (arguments, parameters, `let` definitions) by ranges into the same arena.

use std::fmt;

use crate::{DefRange, ExprId, ExprRange, Name, ParamRange, Span};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    Int(i64),
    Bool(bool),
    /// The empty list.
    Null,
    Ident(Name),
    Prim(PrimFn),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `func(args...)`
    App {
        func: ExprId,
        args: ExprRange,
    },
    /// `map params to body`
    Map {
        params: ParamRange,
        body: ExprId,
    },
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    /// `let x := e; ... in body`, all definitions simultaneous.
    Let {
        defs: DefRange,
        body: ExprId,
    },
}

/// A closure parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Name,
    pub span: Span,
}

/// One `name := init;` definition of a `let`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LetDef {
    pub name: Name,
    /// Span of the defined name only.
    pub span: Span,
    pub init: ExprId,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
        }
    }

    /// Binding strength; higher binds tighter. All levels are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::Gt
            | BinaryOp::LtEq
            | BinaryOp::GtEq => 3,
            BinaryOp::Add | BinaryOp::Sub => 4,
            BinaryOp::Mul | BinaryOp::Div => 5,
        }
    }

    /// Operators that take integer operands.
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `+e`
    Pos,
    /// `-e`
    Neg,
    /// `~e`
    Not,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Pos => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "~",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Built-in functions. They are first-class values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimFn {
    NumberP,
    FunctionP,
    ListP,
    ConsP,
    NullP,
    Arity,
    Cons,
    First,
    Rest,
}

impl PrimFn {
    pub const ALL: [PrimFn; 9] = [
        PrimFn::NumberP,
        PrimFn::FunctionP,
        PrimFn::ListP,
        PrimFn::ConsP,
        PrimFn::NullP,
        PrimFn::Arity,
        PrimFn::Cons,
        PrimFn::First,
        PrimFn::Rest,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrimFn::NumberP => "number?",
            PrimFn::FunctionP => "function?",
            PrimFn::ListP => "list?",
            PrimFn::ConsP => "cons?",
            PrimFn::NullP => "null?",
            PrimFn::Arity => "arity",
            PrimFn::Cons => "cons",
            PrimFn::First => "first",
            PrimFn::Rest => "rest",
        }
    }

    pub fn from_name(name: &str) -> Option<PrimFn> {
        PrimFn::ALL.into_iter().find(|prim| prim.name() == name)
    }

    /// Number of arguments the primitive accepts.
    pub fn arity(self) -> usize {
        match self {
            PrimFn::Cons => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for PrimFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
