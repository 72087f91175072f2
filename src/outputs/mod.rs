//! Output representations for strategy and context evaluation.

pub mod panel_output;
pub mod pipeline_output;
pub mod strategy_output;

pub use panel_output::PanelOutput;
pub use pipeline_output::PipelineOutput;
pub use strategy_output::StrategyOutput;
