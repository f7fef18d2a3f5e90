//! Tool system for function calling.

pub mod arguments;
pub mod math;
pub mod schema;
pub mod tool;
pub mod validation;

pub use arguments::ToolArguments;
pub use schema::ToolParameters;
pub use tool::{FunctionTool, Tool};
