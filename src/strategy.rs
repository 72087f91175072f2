//! The strategy contract — the unit of interchangeable behavior.
//!
//! A strategy is a concrete, immutable variant of a single-operation
//! capability: it is constructed once with fixed parameters (validated at
//! construction time) and then evaluates inputs as a pure function of those
//! parameters. Contexts ([`Panel`](crate::panel::Panel),
//! [`Pipeline`](crate::pipeline::Pipeline)) hold strategies only through
//! this trait and never inspect concrete types.

/// A single-operation contract implemented by interchangeable strategies.
///
/// `I` and `O` are fixed per use case (score to grade label, price to
/// discounted price, shape to area). Any type implementing this trait is a
/// valid strategy regardless of its internal representation.
pub trait Strategy<I, O>: Send + Sync {
    /// Stable identifier for this strategy, used in outputs and context
    /// fingerprints. Conventionally namespaced, e.g. `"pricing:percentage"`.
    fn name(&self) -> &str;

    /// Evaluate the input. Pure: no shared state is read or mutated, and
    /// repeated invocations with the same input yield the same output.
    fn evaluate(&self, input: &I) -> O;
}

impl<I, O> std::fmt::Debug for dyn Strategy<I, O> + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Doubler;

    impl Strategy<i32, i32> for Doubler {
        fn name(&self) -> &str {
            "test:doubler"
        }

        fn evaluate(&self, input: &i32) -> i32 {
            input * 2
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let strategy: Arc<dyn Strategy<i32, i32>> = Arc::new(Doubler);
        assert_eq!(strategy.evaluate(&21), 42);
        assert_eq!(strategy.name(), "test:doubler");
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let strategy = Doubler;
        assert_eq!(strategy.evaluate(&5), strategy.evaluate(&5));
    }
}
