//! Completion result types.

use super::generation::FinishReason;
use super::message::{Message, ToolCall, ToolResult};
use super::usage::Usage;

/// Result of a completion call.
#[derive(Debug, Clone)]
pub struct CompletionResult {
    /// Final generated text.
    pub text: String,
    /// All steps taken (more than one when tools were used).
    pub steps: Vec<CompletionStep>,
    /// Full message history including tool interactions.
    pub messages: Vec<Message>,
    /// Aggregated usage across all steps.
    pub usage: Usage,
    /// Why the final step finished.
    pub finish_reason: Option<FinishReason>,
}

/// A single completion step (one model call).
#[derive(Debug, Clone)]
pub struct CompletionStep {
    /// Text generated in this step.
    pub text: String,
    /// Tool calls made in this step, if any.
    pub tool_calls: Vec<ToolCall>,
    /// Tool results returned in this step, if any.
    pub tool_results: Vec<ToolResult>,
    /// Token usage for this step.
    pub usage: Usage,
    /// Finish reason for this step.
    pub finish_reason: Option<FinishReason>,
}
