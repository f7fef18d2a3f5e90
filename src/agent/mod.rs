//! Agent construction and single-shot invocation.

use std::sync::Arc;
use std::time::Duration;

use bon::Builder;

use crate::error::Result;
use crate::generation::complete_with_tools;
use crate::models::OpenAiModel;
use crate::provider::openai::OpenAiProvider;
use crate::provider::ChatProvider;
use crate::tools::tool::Tool;
use crate::types::{Message, SamplingSettings};

/// Placeholder printed when an invocation yields no messages.
pub const NO_RESPONSE: &str = "No response";

/// Immutable agent configuration; constructed once, never mutated.
#[derive(Debug, Clone, Builder)]
pub struct AgentConfig {
    #[builder(default)]
    pub model: OpenAiModel,
    #[builder(default = 0.1)]
    pub temperature: f64,
    #[builder(default = 1000)]
    pub max_tokens: u32,
    #[builder(default = Duration::from_secs(60))]
    pub timeout: Duration,
    #[builder(into)]
    pub api_key: String,
    #[builder(into)]
    pub system_prompt: Option<String>,
}

/// An agent binding a hosted chat model to a set of callable tools.
///
/// Holds no conversation state: each `invoke` receives the full message
/// sequence and returns the updated one.
pub struct Agent {
    provider: Box<dyn ChatProvider>,
    tools: Vec<Arc<dyn Tool>>,
    system_prompt: Option<String>,
    settings: SamplingSettings,
}

impl Agent {
    /// Build an agent backed by the OpenAI provider.
    pub fn new(config: AgentConfig, tools: Vec<Arc<dyn Tool>>) -> Result<Self> {
        let settings = SamplingSettings::builder()
            .temperature(config.temperature)
            .max_tokens(config.max_tokens)
            .build();
        let provider = OpenAiProvider::new(config.model, config.api_key, config.timeout)?;

        Ok(Self {
            provider: Box::new(provider),
            tools,
            system_prompt: config.system_prompt,
            settings,
        })
    }

    /// Build an agent over an arbitrary provider.
    pub fn with_provider(
        provider: Box<dyn ChatProvider>,
        tools: Vec<Arc<dyn Tool>>,
        system_prompt: Option<String>,
        settings: SamplingSettings,
    ) -> Self {
        Self {
            provider,
            tools,
            system_prompt,
            settings,
        }
    }

    /// The model ID this agent is bound to.
    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    /// Perform one request/response cycle.
    ///
    /// Prepends the system prompt, runs the completion (executing any tool
    /// calls the model makes), and returns the updated message sequence.
    /// The last message's text is the externally visible answer.
    pub async fn invoke(&self, messages: Vec<Message>) -> Result<Vec<Message>> {
        let mut full = Vec::with_capacity(messages.len() + 1);
        if let Some(ref system) = self.system_prompt {
            full.push(Message::system(system.clone()));
        }
        full.extend(messages);

        let result =
            complete_with_tools(self.provider.as_ref(), full, self.settings.clone(), &self.tools)
                .await?;

        Ok(result.messages)
    }
}

/// Text of the last message, or the fallback when the sequence is empty.
pub fn final_response(messages: &[Message]) -> String {
    messages
        .last()
        .map(|m| m.text())
        .unwrap_or_else(|| NO_RESPONSE.to_string())
}
