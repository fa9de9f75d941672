//! AST dispatch.

use std::rc::Rc;

use jam_check::CheckedProgram;
use jam_ir::{BinaryOp, ExprId, ExprKind, ExprRange, Name, ParamRange};
use jam_stack::ensure_sufficient_stack;
use tracing::trace;

use super::{EvalConfig, EvalContext};
use crate::diagnostics::EvalCounters;
use crate::environment::Env;
use crate::errors::{self, EvalResult};
use crate::operators::evaluate_binary;
use crate::policy::EvalPolicy;
use crate::primitives::call_primitive;
use crate::unary_operators::evaluate_unary;
use crate::value::Closure;
use crate::Value;

/// Evaluates expressions in one environment.
///
/// Cheap to clone: suspensions capture a clone, and every scope change
/// (closure body, `let` body) makes a new one with [`Evaluator::with_env`]
/// sharing the same context.
#[derive(Clone)]
pub(crate) struct Evaluator {
    ctx: Rc<EvalContext>,
    env: Env,
}

impl Evaluator {
    pub(crate) fn new(ctx: Rc<EvalContext>, env: Env) -> Self {
        Evaluator { ctx, env }
    }

    /// A top-level evaluator with a fresh context for `program`.
    pub(crate) fn for_program(program: &CheckedProgram, config: &EvalConfig) -> Self {
        Evaluator::new(Rc::new(EvalContext::new(program, config)), Env::empty())
    }

    /// Counters of this evaluator's run so far, with the depth high-water mark.
    pub(crate) fn snapshot(&self) -> Option<EvalCounters> {
        self.ctx.snapshot()
    }

    pub(crate) fn with_env(&self, env: Env) -> Evaluator {
        Evaluator {
            ctx: Rc::clone(&self.ctx),
            env,
        }
    }

    pub(crate) fn env(&self) -> &Env {
        &self.env
    }

    #[inline]
    pub(crate) fn policy(&self) -> EvalPolicy {
        self.ctx.policy
    }

    #[inline]
    pub(crate) fn count(&self, bump: impl FnOnce(&mut EvalCounters)) {
        if let Some(counters) = &self.ctx.counters {
            bump(&mut counters.borrow_mut());
        }
    }

    pub(crate) fn eval(&self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| {
            let _depth = self
                .ctx
                .depth
                .enter()
                .map_err(|exceeded| errors::recursion_limit(exceeded.limit))?;
            self.count(EvalCounters::count_expression);
            let expr = self.ctx.arena.get_expr(id);
            self.eval_kind(id, &expr.kind)
                .map_err(|err| err.with_span_if_absent(expr.span))
        })
    }

    fn eval_kind(&self, id: ExprId, kind: &ExprKind) -> EvalResult {
        match *kind {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Null => Ok(Value::null()),
            ExprKind::Prim(prim) => Ok(Value::Prim(prim)),
            ExprKind::Ident(name) => self.eval_ident(name),
            ExprKind::Unary { op, operand } => evaluate_unary(op, &self.eval(operand)?),
            ExprKind::Binary { op, left, right } => self.eval_binary(op, left, right),
            ExprKind::App { func, args } => self.eval_app(func, args),
            ExprKind::Map { params, body } => Ok(self.make_closure(id, params, body)),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(cond)? {
                Value::Bool(true) => self.eval(then_branch),
                Value::Bool(false) => self.eval(else_branch),
                other => Err(errors::if_test_not_boolean(&other)),
            },
            ExprKind::Let { defs, body } => {
                self.policy()
                    .eval_let(self.ctx.arena.get_defs(defs), body, self)
            }
        }
    }

    fn eval_ident(&self, name: Name) -> EvalResult {
        match self.env.lookup(name) {
            Some(binding) => binding.resolve(),
            None => Err(errors::unbound_variable(self.ctx.interner.lookup(name))),
        }
    }

    fn eval_binary(&self, op: BinaryOp, left: ExprId, right: ExprId) -> EvalResult {
        match op {
            BinaryOp::And | BinaryOp::Or => {
                let lhs = self.eval(left)?;
                let Some(decided) = lhs.as_bool() else {
                    return Err(errors::binary_type_mismatch(op, "a boolean", &lhs));
                };
                // `false & _` and `true | _` never look at the right side.
                if decided == (op == BinaryOp::Or) {
                    return Ok(Value::Bool(decided));
                }
                let rhs = self.eval(right)?;
                match rhs {
                    Value::Bool(b) => Ok(Value::Bool(b)),
                    other => Err(errors::binary_type_mismatch(op, "a boolean", &other)),
                }
            }
            _ => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                evaluate_binary(op, &lhs, &rhs)
            }
        }
    }

    fn make_closure(&self, lambda: ExprId, params: ParamRange, body: ExprId) -> Value {
        Value::Closure(Rc::new(Closure {
            lambda,
            params,
            body,
            env: self.env.clone(),
        }))
    }

    fn eval_app(&self, func: ExprId, args: ExprRange) -> EvalResult {
        let callee = self.eval(func)?;
        let args = self.ctx.arena.get_expr_list(args);
        match callee {
            Value::Closure(closure) => self.call_closure(&closure, args),
            Value::Prim(prim) => call_primitive(self, prim, args),
            other => Err(errors::not_a_function(&other)),
        }
    }

    /// Bind the arguments per the policy, onto the closure's own environment.
    fn call_closure(&self, closure: &Closure, args: &[ExprId]) -> EvalResult {
        if closure.arity() != args.len() {
            return Err(errors::closure_arity_mismatch(closure.arity(), args.len()));
        }
        self.count(EvalCounters::count_function_call);
        let policy = self.policy();
        let params = self.ctx.arena.get_params(closure.params);
        let bindings = params
            .iter()
            .zip(args)
            .map(|(param, &arg)| policy.make_binding(param.name, arg, self))
            .collect::<Result<Vec<_>, _>>()?;
        trace!(
            lambda = closure.lambda.index(),
            depth = self.ctx.depth.depth(),
            "calling closure"
        );
        self.with_env(closure.env.extend(bindings)).eval(closure.body)
    }
}
