//! Static context check for Jam programs.
//!
//! Runs between parsing and evaluation and rejects, over the whole tree and
//! before anything is evaluated:
//!
//! - a variable reference that no enclosing binder introduces
//! - a name bound twice in one `map` parameter list or one `let`
//!
//! Two scoping disciplines are available through [`ScopeMode`]. The default,
//! [`ScopeMode::Lexical`], mirrors the evaluator exactly: a program that
//! passes never hits an unbound variable at run time.

mod error;
mod flat;
mod lexical;

use jam_ir::{ExprId, Name, SharedArena, SharedInterner, Span, StringInterner};
use jam_parse::ParseOutput;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

pub use error::{BinderKind, CheckError, CheckErrorKind};

/// How binder visibility is computed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScopeMode {
    /// Block scoping. `map` parameters are visible in the body only; `let`
    /// names in the `let` body only, not in the right-hand sides.
    #[default]
    Lexical,
    /// Breadth-first walk with one accumulating set of known names that
    /// never shrinks. A binder anywhere earlier in the walk makes its names
    /// visible to everything visited later, including sibling branches and
    /// the right-hand sides of its own `let`.
    Flat,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckConfig {
    pub scope_mode: ScopeMode,
}

/// A parsed program that passed the context check, ready to evaluate.
#[derive(Clone, Debug)]
pub struct CheckedProgram {
    arena: SharedArena,
    interner: SharedInterner,
    root: ExprId,
}

impl CheckedProgram {
    /// Wrap a tree without checking it.
    ///
    /// Evaluation of such a program may fail with unbound variables.
    pub fn assume_checked(arena: SharedArena, interner: SharedInterner, root: ExprId) -> Self {
        CheckedProgram {
            arena,
            interner,
            root,
        }
    }

    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn root(&self) -> ExprId {
        self.root
    }
}

/// Check a parsed program.
#[tracing::instrument(level = "debug", skip_all, fields(mode = ?config.scope_mode))]
pub fn check(
    parsed: ParseOutput,
    interner: &SharedInterner,
    config: CheckConfig,
) -> Result<CheckedProgram, CheckError> {
    let ParseOutput { arena, root } = parsed;
    match config.scope_mode {
        ScopeMode::Lexical => lexical::check(&arena, interner, root)?,
        ScopeMode::Flat => flat::check(&arena, interner, root)?,
    }
    debug!(nodes = arena.len(), "context check passed");
    Ok(CheckedProgram {
        arena: SharedArena::new(arena),
        interner: interner.clone(),
        root,
    })
}

/// Reject the first name that repeats within one binder group.
fn check_distinct(
    group: impl IntoIterator<Item = (Name, Span)>,
    binder: BinderKind,
    interner: &StringInterner,
) -> Result<(), CheckError> {
    let mut seen: FxHashMap<Name, Span> = FxHashMap::default();
    for (name, span) in group {
        match seen.entry(name) {
            Entry::Occupied(first) => {
                return Err(CheckError::duplicate_binding(
                    interner.lookup(name),
                    binder,
                    *first.get(),
                    span,
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(span);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
