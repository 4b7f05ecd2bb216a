//! Boundary to the external AI math solver.
//!
//! The solver itself is a remote language model and is not implemented
//! here. This module defines the contract a backend must satisfy, the
//! configuration it is built from, and the chat transcript kept by the
//! solver screen.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Greeting that opens every conversation.
pub const WELCOME_TEXT: &str = "Hello! I am your AI Math Assistant. Ask me to solve an equation, convert units, or explain a math concept.";

/// Reply recorded when the solver answers with nothing.
pub const EMPTY_REPLY_TEXT: &str = "I couldn't generate a solution. Please try again.";

/// Reply recorded when the solver request fails.
pub const FAILURE_TEXT: &str =
    "I'm having trouble connecting to the network right now. Please verify your API key.";

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are an expert mathematician and helpful assistant. \
Your task is to solve math problems, unit conversions, and logic puzzles provided by the user. \
Provide a clear, step-by-step explanation followed by the final answer in bold. \
Keep the response concise and suitable for a mobile screen. \
If the input is just a simple expression (e.g., '5 * 5'), just return the result. \
Use Markdown for formatting.";

/// Errors a solver backend can report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    #[error("API key is missing; set the API_KEY environment variable")]
    MissingApiKey,

    #[error("failed to connect to the AI solver service: {0}")]
    Connection(String),
}

/// A backend that turns a free-text question into a free-text answer.
#[async_trait]
pub trait MathSolver: Send + Sync {
    async fn solve(
        &self,
        prompt: &str,
    ) -> Result<String, SolverError>;
}

/// Settings a solver backend is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Kept low so answers to the same question stay stable.
    pub temperature: f32,
    pub system_instruction: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

impl SolverConfig {
    /// Default configuration with the key taken from `API_KEY`.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("API_KEY").ok().filter(|key| !key.is_empty()),
            ..Self::default()
        }
    }

    /// Returns the API key, or [`SolverError::MissingApiKey`].
    pub fn require_api_key(&self) -> Result<&str, SolverError> {
        self.api_key.as_deref().ok_or(SolverError::MissingApiKey)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    #[serde(default)]
    pub is_error: bool,
}

/// Transcript of a solver session.
///
/// [`submit`](Self::submit) takes `&mut self` across the whole request, so
/// a second question cannot be sent while one is still awaiting its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self {
            messages: vec![welcome_message()],
            next_id: 1,
        }
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Drops everything but the welcome message.
    pub fn clear(&mut self) {
        self.messages.truncate(1);
    }

    /// Sends a question to the solver and records both sides of the exchange.
    ///
    /// Blank prompts are ignored and return `None`. Otherwise returns the
    /// recorded reply, which is flagged `is_error` when the solver failed.
    pub async fn submit(
        &mut self,
        solver: &dyn MathSolver,
        prompt: &str,
    ) -> Option<&ChatMessage> {
        if prompt.trim().is_empty() {
            return None;
        }

        self.push(ChatRole::User, prompt.to_string(), false);
        debug!(len = prompt.len(), "submitting prompt to solver");

        match solver.solve(prompt).await {
            Ok(reply) if reply.trim().is_empty() => {
                self.push(ChatRole::Model, EMPTY_REPLY_TEXT.to_string(), false)
            }
            Ok(reply) => self.push(ChatRole::Model, reply, false),
            Err(error) => {
                warn!(%error, "solver request failed");
                self.push(ChatRole::Model, FAILURE_TEXT.to_string(), true)
            }
        }

        self.messages.last()
    }

    fn push(
        &mut self,
        role: ChatRole,
        text: String,
        is_error: bool,
    ) {
        self.messages.push(ChatMessage {
            id: self.next_id.to_string(),
            role,
            text,
            is_error,
        });
        self.next_id += 1;
    }
}

fn welcome_message() -> ChatMessage {
    ChatMessage {
        id: "welcome".to_string(),
        role: ChatRole::Model,
        text: WELCOME_TEXT.to_string(),
        is_error: false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct FixedSolver(Result<String, SolverError>);

    #[async_trait]
    impl MathSolver for FixedSolver {
        async fn solve(
            &self,
            _prompt: &str,
        ) -> Result<String, SolverError> {
            match &self.0 {
                Ok(reply) => Ok(reply.clone()),
                Err(SolverError::MissingApiKey) => Err(SolverError::MissingApiKey),
                Err(SolverError::Connection(msg)) => Err(SolverError::Connection(msg.clone())),
            }
        }
    }

    #[test]
    fn conversation_starts_with_welcome() {
        let conversation = Conversation::new();

        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].text, WELCOME_TEXT);
        assert_eq!(conversation.messages()[0].role, ChatRole::Model);
    }

    #[tokio::test]
    async fn submit_records_question_and_answer() {
        let solver = FixedSolver(Ok("**25**".to_string()));
        let mut conversation = Conversation::new();

        let reply = conversation.submit(&solver, "5 * 5").await.cloned();

        assert_eq!(reply.map(|m| m.text), Some("**25**".to_string()));
        let roles: Vec<ChatRole> = conversation.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::Model, ChatRole::User, ChatRole::Model]);
        assert_eq!(conversation.messages()[1].text, "5 * 5");
    }

    #[tokio::test]
    async fn submit_ignores_blank_prompt() {
        let solver = FixedSolver(Ok("unused".to_string()));
        let mut conversation = Conversation::new();

        let reply = conversation.submit(&solver, "   ").await;

        assert!(reply.is_none());
        assert_eq!(conversation.messages().len(), 1);
    }

    #[tokio::test]
    async fn submit_replaces_empty_reply() {
        let solver = FixedSolver(Ok(String::new()));
        let mut conversation = Conversation::new();

        conversation.submit(&solver, "integrate x").await;

        let last = conversation.messages().last().unwrap();
        assert_eq!(last.text, EMPTY_REPLY_TEXT);
        assert!(!last.is_error);
    }

    #[tokio::test]
    async fn submit_flags_failure() {
        let solver = FixedSolver(Err(SolverError::Connection("timeout".to_string())));
        let mut conversation = Conversation::new();

        conversation.submit(&solver, "2 + 2").await;

        let last = conversation.messages().last().unwrap();
        assert_eq!(last.text, FAILURE_TEXT);
        assert!(last.is_error);
    }

    #[tokio::test]
    async fn clear_keeps_only_welcome() {
        let solver = FixedSolver(Ok("4".to_string()));
        let mut conversation = Conversation::new();
        conversation.submit(&solver, "2 + 2").await;

        conversation.clear();

        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].id, "welcome");
    }

    #[test]
    fn default_config_requires_api_key() {
        let config = SolverConfig::default();

        assert_eq!(config.require_api_key(), Err(SolverError::MissingApiKey));
        assert_eq!(config.temperature, 0.2);
    }

    #[test]
    fn config_with_key_returns_it() {
        let config = SolverConfig {
            api_key: Some("secret".to_string()),
            ..SolverConfig::default()
        };

        assert_eq!(config.require_api_key(), Ok("secret"));
    }
}
