//! Razorback — single-shot tool-calling agent for OpenAI chat models.
//!
//! Wires one callable tool into an agent bound to a hosted chat model,
//! performs a single request/response cycle (executing any tool calls the
//! model makes along the way), and surfaces the final assistant message.
//!
//! # Quick Start
//!
//! ```no_run
//! use razorback::prelude::*;
//! use razorback::tools::math::multiply_tool;
//!
//! # async fn example() -> razorback::error::Result<()> {
//! let settings = Settings::from_env()?;
//! let config = AgentConfig::builder()
//!     .api_key(settings.openai_api_key)
//!     .build();
//! let agent = Agent::new(config, vec![multiply_tool()])?;
//! let messages = agent.invoke(vec![Message::user("multiply 6 by 7")]).await?;
//! println!("{}", final_response(&messages));
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod prelude;
pub mod provider;
pub mod tools;
pub mod types;
