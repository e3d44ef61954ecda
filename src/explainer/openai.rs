// OpenAI chat-completions client
use crate::config::OpenAiConfig;
use crate::explainer::{build_prompt, Explainer};
use crate::model::{ExplainError, QuizAnswer, ScoredVehicle};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const SYSTEM_PROMPT: &str =
    "You are a helpful car expert who explains car recommendations in a friendly, conversational way.";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiExplainer {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiExplainer {
    pub fn new(config: OpenAiConfig, timeout: Duration) -> Result<Self, ExplainError> {
        let client = Client::builder().timeout(timeout).build()?;
        info!("🤖 OpenAI explainer initialized (model {})", config.model);
        Ok(Self { client, config })
    }
}

#[async_trait::async_trait]
impl Explainer for OpenAiExplainer {
    async fn explain(&self, vehicles: &[ScoredVehicle], quiz: &QuizAnswer) -> Result<String, ExplainError> {
        if self.config.api_key.is_empty() {
            return Err(ExplainError::NotConfigured);
        }

        let prompt = build_prompt(vehicles, quiz);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: &prompt },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".into());
            warn!("❌ OpenAI responded [{}]: {}", status, body);
            return Err(ExplainError::InvalidResponse(status.as_u16()));
        }

        let reply: ChatResponse = response.json().await?;
        first_completion(reply)
    }
}

fn first_completion(reply: ChatResponse) -> Result<String, ExplainError> {
    reply
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(ExplainError::EmptyCompletion)
}
