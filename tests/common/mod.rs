//! Shared test helpers and mock provider.

use async_trait::async_trait;

use razorback::error::Result;
use razorback::provider::{ChatProvider, ChatRequest, ChatResponse};
use razorback::types::{FinishReason, ToolCall, Usage};

/// A mock provider that returns canned responses in order.
pub struct MockProvider {
    model_id: String,
    responses: std::sync::Mutex<Vec<ChatResponse>>,
    requests: std::sync::Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    pub fn new(model_id: &str) -> Self {
        Self {
            model_id: model_id.to_string(),
            responses: std::sync::Mutex::new(Vec::new()),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Queue a text response.
    pub fn queue_response(&self, text: &str) {
        self.responses.lock().unwrap().push(ChatResponse {
            text: text.to_string(),
            tool_calls: vec![],
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
                total_tokens: 30,
            },
            finish_reason: Some(FinishReason::Stop),
        });
    }

    /// Queue a tool call response.
    pub fn queue_tool_call(&self, id: &str, name: &str, args: serde_json::Value) {
        self.responses.lock().unwrap().push(ChatResponse {
            text: String::new(),
            tool_calls: vec![ToolCall {
                id: id.to_string(),
                name: name.to_string(),
                arguments: args,
            }],
            usage: Usage {
                input_tokens: 10,
                output_tokens: 5,
                total_tokens: 15,
            },
            finish_reason: Some(FinishReason::ToolCalls),
        });
    }

    /// The last request the provider saw, if any.
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(ChatResponse {
                text: "Mock response".to_string(),
                tool_calls: vec![],
                usage: Usage::default(),
                finish_reason: Some(FinishReason::Stop),
            });
        }
        Ok(responses.remove(0))
    }
}
