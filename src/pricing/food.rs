//! Food order data types.
//!
//! [`Food`] stores the attributes of a single item and nothing else;
//! rendering and discounting live elsewhere (the composition root prints,
//! the pricing strategies adjust totals).

use serde::{Deserialize, Serialize};

use crate::utilities::errors::StrategyError;

/// A single food item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    name: String,
    price: f64,
}

impl Food {
    /// Create a food item.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidParameter`] unless `price` is finite
    /// and non-negative.
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, StrategyError> {
        if !price.is_finite() || price < 0.0 {
            return Err(StrategyError::invalid_parameter(
                "price",
                format!("must be finite and non-negative, got {}", price),
            ));
        }
        Ok(Self {
            name: name.into(),
            price,
        })
    }

    /// The name of the food item.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The price of the food item.
    pub fn price(&self) -> f64 {
        self.price
    }
}

/// An order of food items, fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    items: Vec<Food>,
}

impl Order {
    /// Create an order.
    pub fn new(items: Vec<Food>) -> Self {
        Self { items }
    }

    /// The ordered items.
    pub fn items(&self) -> &[Food] {
        &self.items
    }

    /// Sum of the item prices, before any discounts.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Food::price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_attributes() {
        let food = Food::new("Pizza", 10.99).unwrap();
        assert_eq!(food.name(), "Pizza");
        assert_eq!(food.price(), 10.99);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        assert!(Food::new("Pizza", -1.0).is_err());
        assert!(Food::new("Pizza", f64::NAN).is_err());
    }

    #[test]
    fn test_order_total() {
        let order = Order::new(vec![
            Food::new("Pizza", 10.99).unwrap(),
            Food::new("Pasta", 9.01).unwrap(),
        ]);
        assert!((order.total() - 20.0).abs() < 1e-9);
        assert_eq!(order.items().len(), 2);
    }

    #[test]
    fn test_empty_order_totals_zero() {
        assert_eq!(Order::default().total(), 0.0);
    }
}
