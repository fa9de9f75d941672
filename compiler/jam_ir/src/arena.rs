//! Flat storage for the syntax tree.
//!
//! Nodes live in one `Vec` and refer to each other by index. Argument lists,
//! parameter lists and `let` definition lists are stored contiguously in side
//! tables and addressed by [`IdRange`].

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

use crate::{Expr, LetDef, Param};

/// Index of an [`Expr`] in its [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// A contiguous run of `T`s in one of the arena's side tables.
pub struct IdRange<T> {
    start: u32,
    len: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> IdRange<T> {
    pub const EMPTY: IdRange<T> = IdRange {
        start: 0,
        len: 0,
        _marker: PhantomData,
    };

    #[inline]
    pub fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    fn indices(self) -> std::ops::Range<usize> {
        let start = self.start as usize;
        start..start + self.len as usize
    }
}

// Manual impls: derives would needlessly require `T: Copy` and friends.
impl<T> Copy for IdRange<T> {}

impl<T> Clone for IdRange<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for IdRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.len == other.len
    }
}

impl<T> Eq for IdRange<T> {}

impl<T> fmt::Debug for IdRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.start, self.len)
    }
}

pub type ExprRange = IdRange<ExprId>;
pub type ParamRange = IdRange<Param>;
pub type DefRange = IdRange<LetDef>;

fn to_index(len: usize, table: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{table} table exceeded u32::MAX entries"))
}

fn push_all<T>(table: &mut Vec<T>, items: impl IntoIterator<Item = T>, name: &str) -> IdRange<T> {
    let start = to_index(table.len(), name);
    table.extend(items);
    let len = to_index(table.len(), name) - start;
    IdRange {
        start,
        len,
        _marker: PhantomData,
    }
}

/// Owner of every node produced by one parse.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    params: Vec<Param>,
    defs: Vec<LetDef>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the node table from the source length.
    pub fn with_capacity(source_len: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(source_len / 3),
            ..Self::default()
        }
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(to_index(self.exprs.len(), "expression"));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    ///
    /// Panics if `id` was allocated by a different arena and is out of bounds.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        push_all(&mut self.expr_lists, ids, "argument")
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.indices()]
    }

    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Param>) -> ParamRange {
        push_all(&mut self.params, params, "parameter")
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Param] {
        &self.params[range.indices()]
    }

    pub fn alloc_defs(&mut self, defs: impl IntoIterator<Item = LetDef>) -> DefRange {
        push_all(&mut self.defs, defs, "definition")
    }

    #[inline]
    pub fn get_defs(&self, range: DefRange) -> &[LetDef] {
        &self.defs[range.indices()]
    }

    /// Number of expression nodes.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprArena")
            .field("exprs", &self.exprs.len())
            .field("expr_lists", &self.expr_lists.len())
            .field("params", &self.params.len())
            .field("defs", &self.defs.len())
            .finish()
    }
}

/// Read-only arena shared between the checker, evaluator and live closures.
#[derive(Clone, Debug)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }
}

impl Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ExprArena> for SharedArena {
    fn from(arena: ExprArena) -> Self {
        SharedArena::new(arena)
    }
}

#[cfg(test)]
mod tests;
