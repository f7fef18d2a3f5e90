//! Razorback binary entry point: one agent, one tool, one invocation.

use razorback::agent::{final_response, Agent, AgentConfig};
use razorback::config::Settings;
use razorback::tools::math::multiply_tool;
use razorback::types::Message;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SYSTEM_PROMPT: &str = "You are a helpful assistant. Be concise and accurate.";
const USER_PROMPT: &str = "use the tool for multiply 2 x 2";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "razorback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> razorback::error::Result<()> {
    let settings = Settings::from_env()?;

    let config = AgentConfig::builder()
        .api_key(settings.openai_api_key)
        .system_prompt(SYSTEM_PROMPT)
        .build();
    let agent = Agent::new(config, vec![multiply_tool()])?;

    let messages = agent.invoke(vec![Message::user(USER_PROMPT)]).await?;

    println!("\n=== Agent Response ===");
    println!("{}", final_response(&messages));

    Ok(())
}
