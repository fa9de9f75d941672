//! Rendering values as Jam prints them.
//!
//! Lists print as `(1 2 3)`, closures as `(closure: map x to x)`. Lazy cells
//! are forced on the way; a spine longer than the print depth, or lists
//! nested deeper than it, end in `...` so an infinite stream still prints.

use jam_ir::printer::print_expr;
use jam_ir::{ExprArena, StringInterner};
use jam_stack::ensure_sufficient_stack;

use crate::errors::EvalError;
use crate::value::List;
use crate::Value;

pub fn render_value(
    value: &Value,
    arena: &ExprArena,
    interner: &StringInterner,
    print_depth: usize,
) -> Result<String, EvalError> {
    let renderer = Renderer {
        arena,
        interner,
        print_depth,
    };
    let mut out = String::new();
    renderer.write_value(value, 0, &mut out)?;
    Ok(out)
}

struct Renderer<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    print_depth: usize,
}

impl Renderer<'_> {
    fn write_value(&self, value: &Value, nesting: usize, out: &mut String) -> Result<(), EvalError> {
        match value {
            Value::Int(n) => out.push_str(&n.to_string()),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Prim(prim) => out.push_str(prim.name()),
            Value::Closure(closure) => {
                out.push_str("(closure: ");
                out.push_str(&print_expr(self.arena, self.interner, closure.lambda));
                out.push(')');
            }
            Value::List(list) => self.write_list(list, nesting, out)?,
        }
        Ok(())
    }

    fn write_list(&self, list: &List, nesting: usize, out: &mut String) -> Result<(), EvalError> {
        if nesting >= self.print_depth {
            out.push_str("...");
            return Ok(());
        }
        out.push('(');
        let mut current = list.clone();
        let mut printed = 0usize;
        while let List::Cons(cell) = current {
            if printed == self.print_depth {
                out.push_str(" ...");
                break;
            }
            if printed > 0 {
                out.push(' ');
            }
            let head = cell.head()?;
            ensure_sufficient_stack(|| self.write_value(&head, nesting.saturating_add(1), out))?;
            current = cell.tail()?;
            printed = printed.saturating_add(1);
        }
        out.push(')');
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
