pub mod pipeline;
pub mod tool;

pub use pipeline::DecisionPipeline;
pub use tool::{MarketTool, ToolPosition, ToolRequest, ToolResponse};
