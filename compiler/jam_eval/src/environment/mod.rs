//! Persistent environments.
//!
//! An [`Env`] is an immutable linked list of bindings shared through `Rc`.
//! Extending prepends and never touches the existing frames, so closures
//! and suspensions can hold on to any environment they were created in.

use std::fmt;
use std::rc::Rc;

use jam_ir::Name;

use crate::errors::EvalResult;
use crate::suspension::Thunk;

/// A name bound to a value, a suspension, or a need cell.
pub struct Binding {
    name: Name,
    value: Thunk,
}

impl Binding {
    pub fn new(name: Name, value: Thunk) -> Self {
        Binding { name, value }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// The bound value, evaluating or reading the cache as the binding kind
    /// requires.
    pub fn resolve(&self) -> EvalResult {
        self.value.force()
    }
}

struct Frame {
    binding: Binding,
    next: Env,
}

// Long chains (deep by-name recursion) would otherwise be freed recursively.
impl Drop for Frame {
    fn drop(&mut self) {
        let mut next = self.next.0.take();
        while let Some(frame) = next {
            next = match Rc::try_unwrap(frame) {
                Ok(mut frame) => frame.next.0.take(),
                Err(_) => None,
            };
        }
    }
}

#[derive(Clone, Default)]
pub struct Env(Option<Rc<Frame>>);

impl Env {
    pub fn empty() -> Self {
        Env(None)
    }

    /// A new environment with `bindings` in front of this one.
    ///
    /// The first binding of the group becomes the head, so iteration yields
    /// the group in its original order.
    #[must_use]
    pub fn extend(&self, bindings: Vec<Binding>) -> Env {
        bindings
            .into_iter()
            .rev()
            .fold(self.clone(), |next, binding| {
                Env(Some(Rc::new(Frame { binding, next })))
            })
    }

    /// Innermost binding of `name`.
    pub fn lookup(&self, name: Name) -> Option<&Binding> {
        self.bindings().find(|binding| binding.name == name)
    }

    pub fn bindings(&self) -> Bindings<'_> {
        Bindings {
            frame: self.0.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The innermost binding and the environment behind it.
    pub(crate) fn split_first(&self) -> Option<(&Binding, &Env)> {
        self.0.as_deref().map(|frame| (&frame.binding, &frame.next))
    }

    /// Whether both environments are the same chain.
    pub fn ptr_eq(&self, other: &Env) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.bindings().map(Binding::name))
            .finish()
    }
}

/// Bindings from innermost to outermost.
pub struct Bindings<'a> {
    frame: Option<&'a Frame>,
}

impl<'a> Iterator for Bindings<'a> {
    type Item = &'a Binding;

    fn next(&mut self) -> Option<&'a Binding> {
        let frame = self.frame?;
        self.frame = frame.next.0.as_deref();
        Some(&frame.binding)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
