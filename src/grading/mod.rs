//! Score classification strategies.
//!
//! Two classification variants share the `Strategy<i32, String>` contract:
//! [`ThresholdGrading`] partitions a score into ordered labeled bands, and
//! [`PassFailGrading`] applies a single threshold. Both are immutable once
//! constructed and validate their parameters up front.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::panel::Panel;
use crate::registry::{StrategyDef, StrategyRegistry};
use crate::strategy::Strategy;
use crate::utilities::errors::{RegistryError, StrategyError};

/// One labeled band: scores at or above `cutoff` (and below the band above)
/// earn `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    /// Inclusive lower bound of the band.
    pub cutoff: i32,
    /// Label assigned to scores in the band.
    pub label: String,
}

impl GradeBand {
    /// Create a new band.
    pub fn new(cutoff: i32, label: impl Into<String>) -> Self {
        Self {
            cutoff,
            label: label.into(),
        }
    }
}

/// Threshold-based classification over ordered, non-overlapping bands.
///
/// Bands are scanned highest cutoff first; a score below every cutoff earns
/// the default label, so the partition is exhaustive by construction.
#[derive(Debug, Clone)]
pub struct ThresholdGrading {
    bands: Vec<GradeBand>,
    default_label: String,
}

impl ThresholdGrading {
    /// Create a threshold classifier.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidParameter`] if `bands` is empty or
    /// the cutoffs are not strictly descending (overlapping or unordered
    /// bands would make the chosen label ambiguous).
    pub fn new(
        bands: Vec<GradeBand>,
        default_label: impl Into<String>,
    ) -> Result<Self, StrategyError> {
        if bands.is_empty() {
            return Err(StrategyError::invalid_parameter(
                "bands",
                "at least one band is required",
            ));
        }
        for pair in bands.windows(2) {
            if pair[1].cutoff >= pair[0].cutoff {
                return Err(StrategyError::invalid_parameter(
                    "bands",
                    format!(
                        "cutoffs must be strictly descending, got {} before {}",
                        pair[0].cutoff, pair[1].cutoff
                    ),
                ));
            }
        }
        Ok(Self {
            bands,
            default_label: default_label.into(),
        })
    }

    /// The stock academic scale: >=90 A, >=80 B, >=70 C, >=60 D, else F.
    pub fn academic() -> Self {
        Self {
            bands: vec![
                GradeBand::new(90, "A"),
                GradeBand::new(80, "B"),
                GradeBand::new(70, "C"),
                GradeBand::new(60, "D"),
            ],
            default_label: "F".to_string(),
        }
    }

    /// The configured bands, highest cutoff first.
    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }
}

impl Strategy<i32, String> for ThresholdGrading {
    fn name(&self) -> &str {
        "grading:numeric"
    }

    fn evaluate(&self, score: &i32) -> String {
        for band in &self.bands {
            if *score >= band.cutoff {
                return band.label.clone();
            }
        }
        self.default_label.clone()
    }
}

/// Binary classification against a single threshold.
#[derive(Debug, Clone)]
pub struct PassFailGrading {
    threshold: i32,
    pass_label: String,
    fail_label: String,
}

impl PassFailGrading {
    /// Create a pass/fail classifier with the default "Pass"/"Fail" labels.
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            pass_label: "Pass".to_string(),
            fail_label: "Fail".to_string(),
        }
    }

    /// Override the two labels.
    pub fn with_labels(
        threshold: i32,
        pass_label: impl Into<String>,
        fail_label: impl Into<String>,
    ) -> Self {
        Self {
            threshold,
            pass_label: pass_label.into(),
            fail_label: fail_label.into(),
        }
    }

    /// The configured threshold.
    pub fn threshold(&self) -> i32 {
        self.threshold
    }
}

impl Strategy<i32, String> for PassFailGrading {
    fn name(&self) -> &str {
        "grading:pass_fail"
    }

    fn evaluate(&self, score: &i32) -> String {
        if *score >= self.threshold {
            self.pass_label.clone()
        } else {
            self.fail_label.clone()
        }
    }
}

/// Build a grading strategy from a registry definition.
///
/// Recognized ids:
/// - `grading:numeric` — optional `bands` parameter (list of
///   `{cutoff, label}`, highest first) and `default_label`; defaults to the
///   academic scale.
/// - `grading:pass_fail` — optional `threshold` parameter (default 60).
///
/// # Errors
///
/// Returns [`RegistryError::UnsupportedDefinition`] for unrecognized ids or
/// malformed parameters, and propagates construction failures.
pub fn from_def(def: &StrategyDef) -> Result<Arc<dyn Strategy<i32, String>>, RegistryError> {
    match def.id.as_str() {
        "grading:numeric" => {
            let strategy = match def.params.get("bands") {
                Some(value) => {
                    let bands: Vec<GradeBand> =
                        serde_json::from_value(value.clone()).map_err(|e| {
                            RegistryError::UnsupportedDefinition {
                                id: def.id.clone(),
                                message: format!("malformed `bands`: {}", e),
                            }
                        })?;
                    let default_label = def.param_str("default_label").unwrap_or("F");
                    ThresholdGrading::new(bands, default_label)?
                }
                None => ThresholdGrading::academic(),
            };
            Ok(Arc::new(strategy))
        }
        "grading:pass_fail" => {
            let threshold = def.param_i64("threshold").unwrap_or(60) as i32;
            Ok(Arc::new(PassFailGrading::new(threshold)))
        }
        _ => Err(RegistryError::UnsupportedDefinition {
            id: def.id.clone(),
            message: "not a grading strategy".to_string(),
        }),
    }
}

/// Resolve `ids` against the registry and assemble a fan-out grading panel.
pub fn panel_from_defs(
    registry: &StrategyRegistry,
    ids: &[&str],
) -> Result<Panel<i32, String>, RegistryError> {
    let mut strategies = Vec::with_capacity(ids.len());
    for id in ids {
        strategies.push(from_def(registry.require(id)?)?);
    }
    Ok(Panel::new(strategies)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_academic_scale_boundaries() {
        let grading = ThresholdGrading::academic();
        assert_eq!(grading.evaluate(&95), "A");
        assert_eq!(grading.evaluate(&90), "A");
        assert_eq!(grading.evaluate(&89), "B");
        assert_eq!(grading.evaluate(&80), "B");
        assert_eq!(grading.evaluate(&75), "C");
        assert_eq!(grading.evaluate(&70), "C");
        assert_eq!(grading.evaluate(&60), "D");
        assert_eq!(grading.evaluate(&59), "F");
        assert_eq!(grading.evaluate(&0), "F");
        assert_eq!(grading.evaluate(&-10), "F");
    }

    #[test]
    fn test_every_score_gets_exactly_one_label() {
        let grading = ThresholdGrading::academic();
        for score in -20..=120 {
            let label = grading.evaluate(&score);
            // The chosen band's cutoff is the greatest cutoff <= score.
            let expected = grading
                .bands()
                .iter()
                .find(|band| score >= band.cutoff)
                .map(|band| band.label.clone())
                .unwrap_or_else(|| "F".to_string());
            assert_eq!(label, expected, "score {}", score);
        }
    }

    #[test]
    fn test_empty_bands_are_rejected() {
        let err = ThresholdGrading::new(Vec::new(), "F").unwrap_err();
        assert!(matches!(err, StrategyError::InvalidParameter { .. }));
    }

    #[test]
    fn test_unordered_bands_are_rejected() {
        let bands = vec![GradeBand::new(60, "D"), GradeBand::new(90, "A")];
        assert!(ThresholdGrading::new(bands, "F").is_err());

        let duplicated = vec![GradeBand::new(90, "A"), GradeBand::new(90, "B")];
        assert!(ThresholdGrading::new(duplicated, "F").is_err());
    }

    #[test]
    fn test_pass_fail_threshold() {
        let grading = PassFailGrading::new(60);
        assert_eq!(grading.evaluate(&75), "Pass");
        assert_eq!(grading.evaluate(&60), "Pass");
        assert_eq!(grading.evaluate(&59), "Fail");
    }

    #[test]
    fn test_pass_fail_is_monotonic() {
        let grading = PassFailGrading::new(60);
        let mut previous_passed = false;
        for score in 0..=100 {
            let passed = grading.evaluate(&score) == "Pass";
            // Once a score passes, every higher score passes too.
            assert!(passed || !previous_passed);
            previous_passed = passed;
        }
    }

    #[test]
    fn test_custom_labels() {
        let grading = PassFailGrading::with_labels(50, "Go", "NoGo");
        assert_eq!(grading.evaluate(&50), "Go");
        assert_eq!(grading.evaluate(&49), "NoGo");
    }

    #[test]
    fn test_from_def_defaults() {
        let numeric = from_def(&StrategyDef::new("grading:numeric")).unwrap();
        assert_eq!(numeric.evaluate(&75), "C");

        let pass_fail = from_def(&StrategyDef::new("grading:pass_fail")).unwrap();
        assert_eq!(pass_fail.evaluate(&75), "Pass");
    }

    #[test]
    fn test_from_def_custom_bands() {
        let bands = serde_json::json!([
            {"cutoff": 50, "label": "Ok"},
        ]);
        let def = StrategyDef::new("grading:numeric")
            .with_param("bands", bands)
            .with_param("default_label", "Poor");
        let strategy = from_def(&def).unwrap();
        assert_eq!(strategy.evaluate(&50), "Ok");
        assert_eq!(strategy.evaluate(&49), "Poor");
    }

    #[test]
    fn test_from_def_rejects_foreign_ids() {
        let err = from_def(&StrategyDef::new("pricing:percentage")).unwrap_err();
        assert!(matches!(err, RegistryError::UnsupportedDefinition { .. }));
    }

    #[test]
    fn test_panel_from_defs() {
        let mut registry = StrategyRegistry::new();
        registry.register(StrategyDef::new("grading:numeric"));
        registry.register(StrategyDef::new("grading:pass_fail"));

        let panel =
            panel_from_defs(&registry, &["grading:numeric", "grading:pass_fail"]).unwrap();
        let output = panel.kickoff(&75);
        assert_eq!(output.to_string(), "[C, Pass]");
    }
}
