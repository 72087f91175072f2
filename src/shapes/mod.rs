//! Planar figure area strategies.
//!
//! Each figure implements `Strategy<(), f64>`: the figure's dimensions are
//! its fixed parameters and evaluation yields its area, so any mix of
//! figures can sit in one fan-out panel and be summed uniformly.

use std::sync::Arc;

use crate::panel::Panel;
use crate::strategy::Strategy;
use crate::utilities::errors::{ContextError, StrategyError};

/// A quadrilateral with independent width and height.
#[derive(Debug, Clone)]
pub struct Quadrilateral {
    width: f64,
    height: f64,
}

impl Quadrilateral {
    /// Create a quadrilateral.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidParameter`] unless both dimensions
    /// are finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self, StrategyError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(StrategyError::invalid_parameter(
                "width",
                format!("must be finite and positive, got {}", width),
            ));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(StrategyError::invalid_parameter(
                "height",
                format!("must be finite and positive, got {}", height),
            ));
        }
        Ok(Self { width, height })
    }
}

impl Strategy<(), f64> for Quadrilateral {
    fn name(&self) -> &str {
        "shapes:quadrilateral"
    }

    fn evaluate(&self, _input: &()) -> f64 {
        self.width * self.height
    }
}

/// A square, a special case of a quadrilateral with one side length.
#[derive(Debug, Clone)]
pub struct Square {
    side: f64,
}

impl Square {
    /// Create a square.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidParameter`] unless the side is
    /// finite and positive.
    pub fn new(side: f64) -> Result<Self, StrategyError> {
        if !side.is_finite() || side <= 0.0 {
            return Err(StrategyError::invalid_parameter(
                "side",
                format!("must be finite and positive, got {}", side),
            ));
        }
        Ok(Self { side })
    }
}

impl Strategy<(), f64> for Square {
    fn name(&self) -> &str {
        "shapes:square"
    }

    fn evaluate(&self, _input: &()) -> f64 {
        self.side * self.side
    }
}

/// Assemble a panel of figures.
pub fn survey(figures: Vec<Arc<dyn Strategy<(), f64>>>) -> Result<Panel<(), f64>, ContextError> {
    Panel::new(figures)
}

/// Total area of the figures in a panel.
pub fn total_area(figures: &Panel<(), f64>) -> f64 {
    figures.kickoff(&()).into_values().into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrilateral_area() {
        let figure = Quadrilateral::new(5.0, 4.0).unwrap();
        assert_eq!(figure.evaluate(&()), 20.0);
    }

    #[test]
    fn test_square_area() {
        let figure = Square::new(3.0).unwrap();
        assert_eq!(figure.evaluate(&()), 9.0);
    }

    #[test]
    fn test_degenerate_dimensions_are_rejected() {
        assert!(Quadrilateral::new(0.0, 4.0).is_err());
        assert!(Quadrilateral::new(5.0, -4.0).is_err());
        assert!(Square::new(f64::NAN).is_err());
    }

    #[test]
    fn test_total_area_over_mixed_figures() {
        let figures = survey(vec![
            Arc::new(Quadrilateral::new(5.0, 4.0).unwrap()) as Arc<dyn Strategy<(), f64>>,
            Arc::new(Square::new(3.0).unwrap()),
        ])
        .unwrap();
        assert_eq!(total_area(&figures), 29.0);
    }

    #[test]
    fn test_substituting_figures_keeps_the_sum_correct() {
        // A square behaves like any other figure in the same panel.
        let only_squares = survey(vec![
            Arc::new(Square::new(2.0).unwrap()) as Arc<dyn Strategy<(), f64>>,
            Arc::new(Square::new(3.0).unwrap()),
        ])
        .unwrap();
        assert_eq!(total_area(&only_squares), 13.0);
    }
}
