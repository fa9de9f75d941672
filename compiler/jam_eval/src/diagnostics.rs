//! Optional evaluation counters for `jam run --stats`.
//!
//! The evaluator holds them as `Option<RefCell<EvalCounters>>`; when
//! disabled, every increment is a no-op. Forces are counted per suspension
//! run, so a need cell read many times contributes one force while a name
//! binding contributes one per read.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalCounters {
    pub expressions_evaluated: u64,
    /// Closure applications.
    pub function_calls: u64,
    pub primitive_calls: u64,
    /// Suspension bodies actually run, by name or by need.
    pub suspensions_forced: u64,
    pub cons_cells_built: u64,
    /// Deepest evaluation nesting reached.
    pub max_depth: usize,
}

impl EvalCounters {
    #[inline]
    pub fn count_expression(&mut self) {
        self.expressions_evaluated = self.expressions_evaluated.wrapping_add(1);
    }

    #[inline]
    pub fn count_function_call(&mut self) {
        self.function_calls = self.function_calls.wrapping_add(1);
    }

    #[inline]
    pub fn count_primitive_call(&mut self) {
        self.primitive_calls = self.primitive_calls.wrapping_add(1);
    }

    #[inline]
    pub fn count_force(&mut self) {
        self.suspensions_forced = self.suspensions_forced.wrapping_add(1);
    }

    #[inline]
    pub fn count_cons(&mut self) {
        self.cons_cells_built = self.cons_cells_built.wrapping_add(1);
    }

    /// Fold the counters of another evaluation into these.
    pub fn merge(&mut self, other: &EvalCounters) {
        self.expressions_evaluated = self
            .expressions_evaluated
            .wrapping_add(other.expressions_evaluated);
        self.function_calls = self.function_calls.wrapping_add(other.function_calls);
        self.primitive_calls = self.primitive_calls.wrapping_add(other.primitive_calls);
        self.suspensions_forced = self
            .suspensions_forced
            .wrapping_add(other.suspensions_forced);
        self.cons_cells_built = self.cons_cells_built.wrapping_add(other.cons_cells_built);
        self.max_depth = self.max_depth.max(other.max_depth);
    }

    pub fn report(&self) -> String {
        format!(
            "Evaluation profile:\n  \
             Expressions evaluated: {}\n  \
             Closure calls:         {}\n  \
             Primitive calls:       {}\n  \
             Suspensions forced:    {}\n  \
             Cons cells built:      {}\n  \
             Max depth:             {}",
            self.expressions_evaluated,
            self.function_calls,
            self.primitive_calls,
            self.suspensions_forced,
            self.cons_cells_built,
            self.max_depth,
        )
    }
}
