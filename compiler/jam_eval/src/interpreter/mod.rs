//! The interpreter entry point.
//!
//! An [`Interpreter`] owns an [`EvalConfig`] and evaluates checked programs
//! under it. Each evaluation gets a fresh [`EvalContext`]: the program's
//! arena and interner, the policy, and the depth and profiling state shared
//! by every [`Evaluator`] (and so every suspension) of that run.

mod builder;
mod evaluator;

use std::cell::RefCell;

use jam_check::CheckedProgram;
use jam_ir::{SharedArena, SharedInterner};
use jam_stack::DepthCounter;
use tracing::debug;

use crate::diagnostics::EvalCounters;
use crate::errors::{EvalError, EvalResult};
use crate::format::render_value;
use crate::policy::EvalPolicy;
use crate::Value;

pub use builder::{EvalConfig, EvalConfigBuilder, DEFAULT_MAX_DEPTH, DEFAULT_PRINT_DEPTH};
pub(crate) use evaluator::Evaluator;

pub(crate) struct EvalContext {
    arena: SharedArena,
    interner: SharedInterner,
    policy: EvalPolicy,
    depth: DepthCounter,
    counters: Option<RefCell<EvalCounters>>,
}

impl EvalContext {
    fn new(program: &CheckedProgram, config: &EvalConfig) -> Self {
        EvalContext {
            arena: program.arena().clone(),
            interner: program.interner().clone(),
            policy: config.policy,
            depth: DepthCounter::new(config.max_depth),
            counters: config.counters.then(|| RefCell::new(EvalCounters::default())),
        }
    }

    fn snapshot(&self) -> Option<EvalCounters> {
        self.counters.as_ref().map(|counters| EvalCounters {
            max_depth: self.depth.high_water_mark(),
            ..counters.borrow().clone()
        })
    }
}

pub struct Interpreter {
    config: EvalConfig,
    /// Totals over every evaluation so far, when enabled.
    counters: RefCell<Option<EvalCounters>>,
}

impl Interpreter {
    pub fn new(config: EvalConfig) -> Self {
        Interpreter {
            config,
            counters: RefCell::new(config.counters.then(EvalCounters::default)),
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn policy(&self) -> EvalPolicy {
        self.config.policy
    }

    /// Evaluate the program to a value.
    ///
    /// Lazy parts of the result (list cells under the name and need list
    /// disciplines) are still unevaluated; forcing them later evaluates
    /// under this policy but is not counted.
    #[tracing::instrument(level = "debug", skip_all, fields(policy = %self.config.policy))]
    pub fn evaluate(&self, program: &CheckedProgram) -> EvalResult {
        self.session(program, |evaluator| evaluator.eval(program.root()))
    }

    /// Evaluate the program and render the result, forcing lazy lists up to
    /// the print depth.
    #[tracing::instrument(level = "debug", skip_all, fields(policy = %self.config.policy))]
    pub fn run(&self, program: &CheckedProgram) -> Result<String, EvalError> {
        self.session(program, |evaluator| {
            let value = evaluator.eval(program.root())?;
            self.render(program, &value)
        })
    }

    pub fn render(&self, program: &CheckedProgram, value: &Value) -> Result<String, EvalError> {
        render_value(
            value,
            program.arena(),
            program.interner(),
            self.config.print_depth,
        )
    }

    pub fn counters(&self) -> Option<EvalCounters> {
        self.counters.borrow().clone()
    }

    fn session<R>(
        &self,
        program: &CheckedProgram,
        f: impl FnOnce(&Evaluator) -> Result<R, EvalError>,
    ) -> Result<R, EvalError> {
        let evaluator = Evaluator::for_program(program, &self.config);
        let result = f(&evaluator);
        if let Some(run) = evaluator.snapshot() {
            debug!(
                expressions = run.expressions_evaluated,
                forced = run.suspensions_forced,
                "evaluation finished"
            );
            if let Some(total) = self.counters.borrow_mut().as_mut() {
                total.merge(&run);
            }
        }
        result
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
