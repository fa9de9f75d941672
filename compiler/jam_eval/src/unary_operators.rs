//! Prefix operators `+`, `-` and `~`.

use jam_ir::UnaryOp;

use crate::errors::{self, EvalResult};
use crate::Value;

pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Pos, Value::Int(n)) => Ok(Value::Int(*n)),
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| errors::integer_overflow(op.as_symbol())),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Pos | UnaryOp::Neg, other) => {
            Err(errors::unary_type_mismatch(op, "an integer", other))
        }
        (UnaryOp::Not, other) => Err(errors::unary_type_mismatch(op, "a boolean", other)),
    }
}
