use std::rc::Rc;

use crate::errors::{self, EvalError, EvalResult};
use crate::suspension::Thunk;
use crate::Value;

/// A Jam list: empty, or a shared cons cell.
#[derive(Clone, Default)]
pub enum List {
    #[default]
    Empty,
    Cons(Rc<ConsCell>),
}

impl List {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, List::Empty)
    }

    /// Prepend an already evaluated head.
    #[must_use]
    pub fn cons(head: Value, tail: List) -> List {
        List::Cons(Rc::new(ConsCell::eager(head, tail)))
    }

    /// Build a fully evaluated list from its elements.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> List {
        let values: Vec<Value> = values.into_iter().collect();
        values
            .into_iter()
            .rev()
            .fold(List::Empty, |tail, head| List::cons(head, tail))
    }
}

/// One list cell. Head and tail each sit behind a [`Thunk`], so the three
/// list disciplines share this one shape and differ only in how the thunks
/// were built.
pub struct ConsCell {
    head: Thunk,
    tail: Thunk,
}

impl ConsCell {
    pub(crate) fn new(head: Thunk, tail: Thunk) -> Self {
        ConsCell { head, tail }
    }

    pub fn eager(head: Value, tail: List) -> Self {
        ConsCell {
            head: Thunk::Ready(head),
            tail: Thunk::Ready(Value::List(tail)),
        }
    }

    pub fn head(&self) -> EvalResult {
        self.head.force()
    }

    /// The tail, which must force to a list.
    pub fn tail(&self) -> Result<List, EvalError> {
        match self.tail.force()? {
            Value::List(list) => Ok(list),
            other => Err(errors::cons_tail_not_a_list(&other)),
        }
    }

    pub fn is_head_forced(&self) -> bool {
        self.head.is_forced()
    }

    pub fn is_tail_forced(&self) -> bool {
        self.tail.is_forced()
    }
}

// Unlink the spine iteratively; recursive drop glue overflows the stack on
// long lists.
impl Drop for ConsCell {
    fn drop(&mut self) {
        let mut next = self.tail.take_list();
        while let Some(cell) = next {
            next = match Rc::try_unwrap(cell) {
                Ok(mut cell) => cell.tail.take_list(),
                Err(_) => None,
            };
        }
    }
}
