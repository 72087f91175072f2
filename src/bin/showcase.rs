//! assay showcase binary.
//!
//! The composition root: constructs concrete strategies with literal
//! parameters, wires them into contexts, and prints the results. This is
//! the only place concrete strategy types are named together.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` — log filter (e.g. "debug" to see context assembly)
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin showcase
//! ```

use std::sync::Arc;

use anyhow::Result;

use assay::grading::{PassFailGrading, ThresholdGrading};
use assay::kitchen::{Brigade, Role};
use assay::pricing::{self, FixedDiscount, Food, Order, PercentageDiscount};
use assay::shapes::{self, Quadrilateral, Square};
use assay::{Panel, Pipeline, Strategy, StrategyDef, StrategyRegistry};

fn main() -> Result<()> {
    env_logger::init();

    food_details()?;
    discount_chain()?;
    grading_panel()?;
    area_survey()?;
    kitchen_service()?;
    registry_wiring()?;

    Ok(())
}

/// The data type stores attributes; rendering happens here.
fn food_details() -> Result<()> {
    let order = Order::new(vec![
        Food::new("Pizza", 10.99)?,
        Food::new("Pasta", 9.01)?,
    ]);
    for food in order.items() {
        println!("Food Details:");
        println!("Name: {}", food.name());
        println!("Price: ${}", food.price());
    }
    println!("Order total: ${}", order.total());
    println!();
    Ok(())
}

/// Chain a percentage discount into a fixed deduction.
fn discount_chain() -> Result<()> {
    let discounts = Pipeline::new(vec![
        Arc::new(PercentageDiscount::new(10.0)?) as Arc<dyn Strategy<f64, f64>>,
        Arc::new(FixedDiscount::new(5.0)?),
    ])?
    .with_name("food discounts");

    let receipt = discounts.kickoff(100.0);
    println!("Final price after applying food discounts: ${}", receipt);
    println!();
    Ok(())
}

/// Grade one score with every configured method at once.
fn grading_panel() -> Result<()> {
    let methods = Panel::new(vec![
        Arc::new(ThresholdGrading::academic()) as Arc<dyn Strategy<i32, String>>,
        Arc::new(PassFailGrading::new(60)),
    ])?
    .with_name("grading system");

    let grades = methods.kickoff(&75);
    println!("Grades: {}", grades);
    println!();
    Ok(())
}

/// Any figure can stand in for any other when summing areas.
fn area_survey() -> Result<()> {
    let figures = shapes::survey(vec![
        Arc::new(Quadrilateral::new(5.0, 4.0)?) as Arc<dyn Strategy<(), f64>>,
        Arc::new(Square::new(3.0)?),
    ])?;

    println!("Total area of planar figures: {}", shapes::total_area(&figures));
    println!();
    Ok(())
}

/// Roles perform only the skills they declare.
fn kitchen_service() -> Result<()> {
    let brigade = Brigade::new(vec![Role::chef(), Role::baker()])?;
    for role in brigade.roles() {
        for line in role.performances() {
            println!("{}", line);
        }
        println!();
    }
    Ok(())
}

/// The same discount chain, wired from declarative definitions.
fn registry_wiring() -> Result<()> {
    let mut registry = StrategyRegistry::with_defaults();
    registry.load_all()?;
    registry.register(StrategyDef::new("pricing:percentage").with_param("rate", 10.0));
    registry.register(StrategyDef::new("pricing:fixed_amount").with_param("amount", 5.0));

    let discounts =
        pricing::pipeline_from_defs(&registry, &["pricing:percentage", "pricing:fixed_amount"])?;
    println!(
        "Final price from registry-wired discounts: ${}",
        discounts.kickoff(100.0)
    );
    Ok(())
}
