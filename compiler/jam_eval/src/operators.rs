//! Binary operators on evaluated operands.
//!
//! Arithmetic is checked 64-bit: overflow is an error, never a wrap.
//! The evaluator short-circuits `&` and `|` itself and only calls in here
//! once both sides are known; [`evaluate_binary`] is strict in both.

use jam_ir::BinaryOp;

use crate::errors::{self, EvalError, EvalResult};
use crate::Value;

pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match op {
        BinaryOp::Eq => left.equals(right).map(Value::Bool),
        BinaryOp::NotEq => left.equals(right).map(|equal| Value::Bool(!equal)),
        BinaryOp::And => {
            let (a, b) = bool_operands(op, left, right)?;
            Ok(Value::Bool(a && b))
        }
        BinaryOp::Or => {
            let (a, b) = bool_operands(op, left, right)?;
            Ok(Value::Bool(a || b))
        }
        BinaryOp::Add => {
            let (a, b) = int_operands(op, left, right)?;
            checked(op, a.checked_add(b))
        }
        BinaryOp::Sub => {
            let (a, b) = int_operands(op, left, right)?;
            checked(op, a.checked_sub(b))
        }
        BinaryOp::Mul => {
            let (a, b) = int_operands(op, left, right)?;
            checked(op, a.checked_mul(b))
        }
        BinaryOp::Div => {
            let (a, b) = int_operands(op, left, right)?;
            if b == 0 {
                return Err(errors::division_by_zero());
            }
            // Truncates toward zero; only i64::MIN / -1 overflows.
            checked(op, a.checked_div(b))
        }
        BinaryOp::Lt => compare(op, left, right, |a, b| a < b),
        BinaryOp::Gt => compare(op, left, right, |a, b| a > b),
        BinaryOp::LtEq => compare(op, left, right, |a, b| a <= b),
        BinaryOp::GtEq => compare(op, left, right, |a, b| a >= b),
    }
}

fn int_operands(op: BinaryOp, left: &Value, right: &Value) -> Result<(i64, i64), EvalError> {
    let a = left
        .as_int()
        .ok_or_else(|| errors::binary_type_mismatch(op, "an integer", left))?;
    let b = right
        .as_int()
        .ok_or_else(|| errors::binary_type_mismatch(op, "an integer", right))?;
    Ok((a, b))
}

fn bool_operands(op: BinaryOp, left: &Value, right: &Value) -> Result<(bool, bool), EvalError> {
    let a = left
        .as_bool()
        .ok_or_else(|| errors::binary_type_mismatch(op, "a boolean", left))?;
    let b = right
        .as_bool()
        .ok_or_else(|| errors::binary_type_mismatch(op, "a boolean", right))?;
    Ok((a, b))
}

fn checked(op: BinaryOp, result: Option<i64>) -> EvalResult {
    result
        .map(Value::Int)
        .ok_or_else(|| errors::integer_overflow(op.as_symbol()))
}

fn compare(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    holds: impl FnOnce(i64, i64) -> bool,
) -> EvalResult {
    let (a, b) = int_operands(op, left, right)?;
    Ok(Value::Bool(holds(a, b)))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
