use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Turn;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReply {
    pub response: String,
    #[serde(default)]
    pub is_secret_revealed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentHealth {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub app_name: String,
}

#[async_trait]
pub trait AgentClient {
    /// Used at startup, and by the `health` command, to verify the agent is
    /// reachable. Not part of the conversation flow.
    async fn health_check(&self) -> Result<AgentHealth>;

    /// Sends a single user message alongside every turn the agent has
    /// already seen. Failures carry a human readable message that is shown to
    /// the user as is.
    async fn send_message(&self, message: &str, context: &[Turn]) -> Result<AgentReply>;
}

pub type AgentBox = Box<dyn AgentClient + Send + Sync>;
