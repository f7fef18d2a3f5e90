//! Tests for the completion loop using the mock provider.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::MockProvider;
use pretty_assertions::assert_eq;
use razorback::generation::complete_with_tools;
use razorback::tools::math::multiply_tool;
use razorback::tools::tool::FunctionTool;
use razorback::tools::{Tool, ToolParameters};
use razorback::types::{FinishReason, Message, Role, SamplingSettings};

#[tokio::test]
async fn completion_without_tool_calls_returns_text() {
    let provider = MockProvider::new("test-model");
    provider.queue_response("Hello from mock!");

    let result = complete_with_tools(
        &provider,
        vec![Message::user("Hi")],
        SamplingSettings::default(),
        &[],
    )
    .await
    .unwrap();

    assert_eq!(result.text, "Hello from mock!");
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.finish_reason, Some(FinishReason::Stop));
}

#[tokio::test]
async fn final_assistant_message_is_appended() {
    let provider = MockProvider::new("test-model");
    provider.queue_response("The answer.");

    let result = complete_with_tools(
        &provider,
        vec![Message::user("Question?")],
        SamplingSettings::default(),
        &[],
    )
    .await
    .unwrap();

    let last = result.messages.last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.text(), "The answer.");
}

#[tokio::test]
async fn tool_call_is_executed_and_fed_back() {
    let provider = MockProvider::new("test-model");
    provider.queue_tool_call("call_1", "multiply", serde_json::json!({"a": 2, "b": 2}));
    provider.queue_response("2 times 2 is 4.");

    let result = complete_with_tools(
        &provider,
        vec![Message::user("multiply 2 by 2")],
        SamplingSettings::default(),
        &[multiply_tool()],
    )
    .await
    .unwrap();

    assert_eq!(result.text, "2 times 2 is 4.");
    assert_eq!(result.steps.len(), 2);
    assert_eq!(result.steps[0].tool_calls.len(), 1);
    assert_eq!(result.steps[0].tool_results.len(), 1);
    assert!(!result.steps[0].tool_results[0].is_error);
    assert_eq!(
        result.steps[0].tool_results[0].result,
        serde_json::json!("2 × 2 = 4")
    );

    // Second request carries the tool interaction
    let request = provider.last_request().unwrap();
    assert!(request.messages.iter().any(|m| m.role == Role::Tool));
}

#[tokio::test]
async fn unknown_tool_produces_error_result() {
    let provider = MockProvider::new("test-model");
    provider.queue_tool_call("call_1", "nonexistent", serde_json::json!({}));
    provider.queue_response("I couldn't find that tool.");

    let result = complete_with_tools(
        &provider,
        vec![Message::user("Use nonexistent tool")],
        SamplingSettings::default(),
        &[],
    )
    .await
    .unwrap();

    assert_eq!(result.steps.len(), 2);
    assert!(result.steps[0].tool_results[0].is_error);
}

#[tokio::test]
async fn invalid_arguments_are_rejected_before_execution() {
    let provider = MockProvider::new("test-model");
    provider.queue_tool_call(
        "call_1",
        "probe",
        serde_json::json!({"value": "not a number"}),
    );
    provider.queue_response("done");

    let executions = Arc::new(AtomicUsize::new(0));
    let executions_ref = Arc::clone(&executions);
    let tool: Arc<dyn Tool> = Arc::new(FunctionTool::new(
        "probe",
        "Probe tool",
        ToolParameters::object().number("value", "A number", true).build(),
        move |_args, _ctx| {
            let executions_ref = Arc::clone(&executions_ref);
            async move {
                executions_ref.fetch_add(1, Ordering::SeqCst);
                Ok(serde_json::json!("ran"))
            }
        },
    ));

    let result = complete_with_tools(
        &provider,
        vec![Message::user("probe")],
        SamplingSettings::default(),
        &[tool],
    )
    .await
    .unwrap();

    assert!(result.steps[0].tool_results[0].is_error);
    assert_eq!(executions.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn usage_accumulates_across_steps() {
    let provider = MockProvider::new("test-model");
    provider.queue_tool_call("call_1", "multiply", serde_json::json!({"a": 3, "b": 3}));
    provider.queue_response("9");

    let result = complete_with_tools(
        &provider,
        vec![Message::user("multiply 3 by 3")],
        SamplingSettings::default(),
        &[multiply_tool()],
    )
    .await
    .unwrap();

    assert_eq!(result.usage.input_tokens, 20);
    assert_eq!(result.usage.output_tokens, 25);
    assert_eq!(result.usage.total_tokens, 45);
}
