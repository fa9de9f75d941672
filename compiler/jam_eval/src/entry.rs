//! One function per evaluator configuration, named `<args>_<lists>`.
//!
//! Each evaluates a checked program with the default depth limit and no
//! counters. Use [`Interpreter`] directly for anything else.

use jam_check::CheckedProgram;

use crate::errors::EvalResult;
use crate::interpreter::{EvalConfig, Interpreter};
use crate::policy::{Discipline, EvalPolicy};

/// Evaluate `program` under `policy` with otherwise default settings.
pub fn evaluate(program: &CheckedProgram, policy: EvalPolicy) -> EvalResult {
    Interpreter::new(EvalConfig::builder().policy(policy).build()).evaluate(program)
}

macro_rules! entry_points {
    ($($name:ident => ($args:ident, $lists:ident), $doc:literal;)*) => {
        $(
            #[doc = $doc]
            pub fn $name(program: &CheckedProgram) -> EvalResult {
                evaluate(program, EvalPolicy::new(Discipline::$args, Discipline::$lists))
            }
        )*
    };
}

entry_points! {
    value_value => (Value, Value), "Strict arguments, eager lists.";
    value_name => (Value, Name), "Strict arguments, by-name lists.";
    value_need => (Value, Need), "Strict arguments, by-need lists.";
    name_value => (Name, Value), "By-name arguments, eager lists.";
    name_name => (Name, Name), "By-name arguments and lists.";
    name_need => (Name, Need), "By-name arguments, by-need lists.";
    need_value => (Need, Value), "By-need arguments, eager lists.";
    need_name => (Need, Name), "By-need arguments, by-name lists.";
    need_need => (Need, Need), "By-need arguments and lists.";
}
