//! Shared intermediate representation for the Jam toolchain.
//!
//! Everything downstream of the lexer speaks in these types:
//!
//! - [`Span`]: byte range into the source text
//! - [`Name`] and [`StringInterner`]: interned identifiers, compared by identity
//! - [`TokenKind`] and [`TokenList`]: lexer output
//! - [`ExprArena`] with [`ExprId`]: the flat, immutable syntax tree
//! - [`printer`]: renders a tree back to concrete syntax

mod arena;
mod ast;
mod interner;
mod name;
pub mod printer;
mod span;
mod token;

pub use arena::{DefRange, ExprArena, ExprId, ExprRange, IdRange, ParamRange, SharedArena};
pub use ast::{BinaryOp, Expr, ExprKind, LetDef, Param, PrimFn, UnaryOp};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
