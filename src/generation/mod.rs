//! Completion with a tool-call loop.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::Result;
use crate::provider::{ChatProvider, ChatRequest, ToolDefinition};
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::{Tool, ToolExecutionContext};
use crate::tools::validation::validate_arguments;
use crate::types::{
    CompletionResult, CompletionStep, ContentPart, FinishReason, Message, Role, SamplingSettings,
    ToolCall, ToolResult, Usage,
};

/// Cap on provider round-trips when the model keeps requesting tools.
const MAX_TOOL_ITERATIONS: usize = 8;

/// Run one completion, executing tool calls until the model produces text.
///
/// When the model returns tool calls, each is validated against the tool's
/// declared schema, executed, and fed back as a tool-result message before
/// the provider is called again. The final assistant message is appended to
/// the returned message sequence.
pub async fn complete_with_tools(
    provider: &dyn ChatProvider,
    mut messages: Vec<Message>,
    settings: SamplingSettings,
    tools: &[Arc<dyn Tool>],
) -> Result<CompletionResult> {
    let tool_defs: Vec<ToolDefinition> = tools
        .iter()
        .map(|t| ToolDefinition {
            name: t.name().to_string(),
            description: t.description().to_string(),
            parameters: t.parameters().schema.clone(),
        })
        .collect();

    let mut steps = Vec::new();
    let mut total_usage = Usage::default();

    for iteration in 0..MAX_TOOL_ITERATIONS {
        let request = ChatRequest {
            messages: messages.clone(),
            settings: settings.clone(),
            tools: tool_defs.clone(),
        };

        debug!(iteration, "requesting completion");
        let response = provider.complete(&request).await?;

        total_usage.merge(&response.usage);

        let mut step = CompletionStep {
            text: response.text.clone(),
            tool_calls: response.tool_calls.clone(),
            tool_results: Vec::new(),
            usage: response.usage,
            finish_reason: response.finish_reason,
        };

        if response.tool_calls.is_empty() {
            messages.push(Message::assistant(&response.text));
            steps.push(step);

            return Ok(CompletionResult {
                text: response.text,
                steps,
                messages,
                usage: total_usage,
                finish_reason: response.finish_reason,
            });
        }

        // Assistant message carrying the tool calls
        let mut content: Vec<ContentPart> = Vec::new();
        if !response.text.is_empty() {
            content.push(ContentPart::Text {
                text: response.text.clone(),
            });
        }
        content.extend(response.tool_calls.iter().cloned().map(ContentPart::ToolCall));
        messages.push(Message {
            role: Role::Assistant,
            content,
            timestamp: Some(chrono::Utc::now()),
        });

        let ctx = ToolExecutionContext::default();
        for call in &response.tool_calls {
            let result = execute_call(tools, call, &ctx).await;
            messages.push(Message::tool_result(
                result.tool_call_id.clone(),
                result.result.clone(),
                result.is_error,
            ));
            step.tool_results.push(result);
        }

        steps.push(step);
    }

    warn!("tool loop exceeded {MAX_TOOL_ITERATIONS} iterations, giving up");
    let text = steps.last().map(|s| s.text.clone()).unwrap_or_default();
    Ok(CompletionResult {
        text,
        steps,
        messages,
        usage: total_usage,
        finish_reason: Some(FinishReason::Length),
    })
}

/// Resolve, validate, and execute a single tool call.
///
/// Failures become error-flagged tool results fed back to the model; they
/// never abort the loop.
async fn execute_call(
    tools: &[Arc<dyn Tool>],
    call: &ToolCall,
    ctx: &ToolExecutionContext,
) -> ToolResult {
    let Some(tool) = tools.iter().find(|t| t.name() == call.name) else {
        warn!(tool = call.name, "tool not found");
        return error_result(call, format!("tool '{}' not found", call.name));
    };

    if let Err(violation) = validate_arguments(&call.arguments, &tool.parameters().schema) {
        warn!(tool = call.name, %violation, "rejected tool arguments");
        return error_result(call, format!("invalid arguments: {violation}"));
    }

    let args = ToolArguments::new(call.arguments.clone());
    match tool.execute(&args, ctx).await {
        Ok(value) => ToolResult {
            tool_call_id: call.id.clone(),
            result: value,
            is_error: false,
        },
        Err(e) => {
            warn!(tool = call.name, error = %e, "tool execution failed");
            error_result(call, e.to_string())
        }
    }
}

fn error_result(call: &ToolCall, message: String) -> ToolResult {
    ToolResult {
        tool_call_id: call.id.clone(),
        result: serde_json::json!({ "error": message }),
        is_error: true,
    }
}
