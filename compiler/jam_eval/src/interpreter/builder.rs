//! `EvalConfig` and its builder.

use crate::policy::{Discipline, EvalPolicy};

/// Default bound on evaluation nesting.
pub const DEFAULT_MAX_DEPTH: usize = 100_000;

/// Default number of list cells, and of nesting levels, rendered before
/// eliding with `...`.
pub const DEFAULT_PRINT_DEPTH: usize = 1000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    pub policy: EvalPolicy,
    /// `None` lets recursion run until memory runs out.
    pub max_depth: Option<usize>,
    pub print_depth: usize,
    /// Collect [`EvalCounters`](crate::EvalCounters).
    pub counters: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            policy: EvalPolicy::default(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
            print_depth: DEFAULT_PRINT_DEPTH,
            counters: false,
        }
    }
}

impl EvalConfig {
    pub fn builder() -> EvalConfigBuilder {
        EvalConfigBuilder::default()
    }
}

/// Builder for [`EvalConfig`]. Unset fields keep their defaults.
#[derive(Clone, Debug, Default)]
pub struct EvalConfigBuilder {
    config: EvalConfig,
}

impl EvalConfigBuilder {
    #[must_use]
    pub fn policy(mut self, policy: EvalPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Set the argument discipline only.
    #[must_use]
    pub fn args(mut self, args: Discipline) -> Self {
        self.config.policy.args = args;
        self
    }

    /// Set the list discipline only.
    #[must_use]
    pub fn lists(mut self, lists: Discipline) -> Self {
        self.config.policy.lists = lists;
        self
    }

    #[must_use]
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn print_depth(mut self, print_depth: usize) -> Self {
        self.config.print_depth = print_depth;
        self
    }

    #[must_use]
    pub fn counters(mut self, enabled: bool) -> Self {
        self.config.counters = enabled;
        self
    }

    pub fn build(self) -> EvalConfig {
        self.config
    }
}
