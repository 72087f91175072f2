//! Price adjustment strategies.
//!
//! Discount strategies share the `Strategy<f64, f64>` contract so they can
//! be chained in a [`Pipeline`]: the discounted total of one stage becomes
//! the input of the next. Order matters — a percentage discount applied
//! before a fixed deduction does not equal the reverse.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::pipeline::Pipeline;
use crate::registry::{StrategyDef, StrategyRegistry};
use crate::strategy::Strategy;
use crate::utilities::errors::{RegistryError, StrategyError};

pub mod food;

pub use food::{Food, Order};

/// What a fixed deduction does when it would push the running total below
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativePolicy {
    /// Let the total go negative.
    Allow,
    /// Floor the total at zero.
    ClampToZero,
}

impl Default for NegativePolicy {
    fn default() -> Self {
        NegativePolicy::Allow
    }
}

/// Percentage discount: multiplies the total by `1 - rate/100`.
#[derive(Debug, Clone)]
pub struct PercentageDiscount {
    rate: f64,
}

impl PercentageDiscount {
    /// Create a percentage discount.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidParameter`] unless `rate` is finite
    /// and lies in `[0, 100]`.
    pub fn new(rate: f64) -> Result<Self, StrategyError> {
        if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
            return Err(StrategyError::invalid_parameter(
                "rate",
                format!("must lie in [0, 100], got {}", rate),
            ));
        }
        Ok(Self { rate })
    }

    /// The configured rate, in percent.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Strategy<f64, f64> for PercentageDiscount {
    fn name(&self) -> &str {
        "pricing:percentage"
    }

    fn evaluate(&self, total: &f64) -> f64 {
        total * (1.0 - self.rate / 100.0)
    }
}

/// Fixed-amount discount: subtracts a constant from the total.
#[derive(Debug, Clone)]
pub struct FixedDiscount {
    amount: f64,
    policy: NegativePolicy,
}

impl FixedDiscount {
    /// Create a fixed-amount discount that lets totals go negative.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidParameter`] unless `amount` is
    /// finite and non-negative.
    pub fn new(amount: f64) -> Result<Self, StrategyError> {
        Self::with_policy(amount, NegativePolicy::Allow)
    }

    /// Create a fixed-amount discount that floors the total at zero.
    pub fn clamped(amount: f64) -> Result<Self, StrategyError> {
        Self::with_policy(amount, NegativePolicy::ClampToZero)
    }

    /// Create a fixed-amount discount with an explicit negative-total policy.
    pub fn with_policy(amount: f64, policy: NegativePolicy) -> Result<Self, StrategyError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(StrategyError::invalid_parameter(
                "amount",
                format!("must be finite and non-negative, got {}", amount),
            ));
        }
        Ok(Self { amount, policy })
    }

    /// The configured deduction amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The configured negative-total policy.
    pub fn policy(&self) -> NegativePolicy {
        self.policy
    }
}

impl Strategy<f64, f64> for FixedDiscount {
    fn name(&self) -> &str {
        "pricing:fixed_amount"
    }

    fn evaluate(&self, total: &f64) -> f64 {
        let discounted = total - self.amount;
        match self.policy {
            NegativePolicy::Allow => discounted,
            NegativePolicy::ClampToZero => discounted.max(0.0),
        }
    }
}

/// Build a pricing strategy from a registry definition.
///
/// Recognized ids:
/// - `pricing:percentage` — required `rate` parameter.
/// - `pricing:fixed_amount` — required `amount` parameter, optional
///   `policy` (`allow` or `clamp_to_zero`).
///
/// # Errors
///
/// Returns [`RegistryError::UnsupportedDefinition`] for unrecognized ids or
/// missing parameters, and propagates construction failures.
pub fn from_def(def: &StrategyDef) -> Result<Arc<dyn Strategy<f64, f64>>, RegistryError> {
    match def.id.as_str() {
        "pricing:percentage" => {
            let rate = def
                .param_f64("rate")
                .ok_or_else(|| RegistryError::UnsupportedDefinition {
                    id: def.id.clone(),
                    message: "missing numeric `rate` parameter".to_string(),
                })?;
            Ok(Arc::new(PercentageDiscount::new(rate)?))
        }
        "pricing:fixed_amount" => {
            let amount = def
                .param_f64("amount")
                .ok_or_else(|| RegistryError::UnsupportedDefinition {
                    id: def.id.clone(),
                    message: "missing numeric `amount` parameter".to_string(),
                })?;
            let policy = match def.params.get("policy") {
                Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                    RegistryError::UnsupportedDefinition {
                        id: def.id.clone(),
                        message: format!("malformed `policy`: {}", e),
                    }
                })?,
                None => NegativePolicy::default(),
            };
            Ok(Arc::new(FixedDiscount::with_policy(amount, policy)?))
        }
        _ => Err(RegistryError::UnsupportedDefinition {
            id: def.id.clone(),
            message: "not a pricing strategy".to_string(),
        }),
    }
}

/// Resolve `ids` against the registry and assemble a discount pipeline,
/// applied in the given order.
pub fn pipeline_from_defs(
    registry: &StrategyRegistry,
    ids: &[&str],
) -> Result<Pipeline<f64>, RegistryError> {
    let mut stages = Vec::with_capacity(ids.len());
    for id in ids {
        stages.push(from_def(registry.require(id)?)?);
    }
    Ok(Pipeline::new(stages)?)
}
