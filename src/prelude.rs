//! Convenience re-exports for common use.

pub use crate::agent::{final_response, Agent, AgentConfig};
pub use crate::config::Settings;
pub use crate::error::{RazorbackError, Result};
pub use crate::models::OpenAiModel;
pub use crate::provider::ChatProvider;
pub use crate::tools::{FunctionTool, Tool, ToolArguments, ToolParameters};
pub use crate::types::{
    ContentPart, FinishReason, Message, Role, SamplingSettings, ToolCall, ToolResult, Usage,
};
