#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AgentClient;
use crate::domain::models::AgentHealth;
use crate::domain::models::AgentReply;
use crate::domain::models::Turn;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct MessageRequest {
    role: String,
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatRequest {
    message: String,
    conversation_history: Vec<MessageRequest>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ErrorResponse {
    detail: serde_json::Value,
}

/// Talks to the Secret Word Challenge chat API.
pub struct HttpAgent {
    url: String,
    health_check_timeout: String,
    request_timeout: String,
}

impl Default for HttpAgent {
    fn default() -> HttpAgent {
        return HttpAgent {
            url: Config::get(ConfigKey::AgentURL),
            health_check_timeout: Config::get(ConfigKey::HealthCheckTimeout),
            request_timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

async fn error_message(res: reqwest::Response) -> String {
    let status = res.status().as_u16();
    let body = res.text().await.unwrap_or_default();

    if let Ok(err_res) = serde_json::from_str::<ErrorResponse>(&body) {
        if let Some(detail) = err_res.detail.as_str() {
            if !detail.trim().is_empty() {
                return detail.to_string();
            }
        }
    }

    return format!("The agent responded with status {status}");
}

impl HttpAgent {
    fn endpoint(&self, path: &str) -> String {
        return format!("{}{path}", self.url.trim_end_matches('/'));
    }
}

#[async_trait]
impl AgentClient for HttpAgent {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<AgentHealth> {
        if self.url.is_empty() {
            bail!("Agent URL is not defined");
        }

        let res = reqwest::Client::new()
            .get(self.endpoint("/api/health"))
            .timeout(Duration::from_millis(
                self.health_check_timeout.parse::<u64>()?,
            ))
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "Agent is not reachable");
                bail!("Agent is not reachable at {}", self.url);
            }
        };

        let status = res.status().as_u16();
        if status >= 400 {
            tracing::error!(status = status, "Agent health check failed");
            bail!("Agent health check failed with status {status}");
        }

        return Ok(res.json::<AgentHealth>().await?);
    }

    #[allow(clippy::implicit_return)]
    async fn send_message(&self, message: &str, context: &[Turn]) -> Result<AgentReply> {
        let req = ChatRequest {
            message: message.to_string(),
            conversation_history: context
                .iter()
                .map(|turn| {
                    return MessageRequest {
                        role: turn.role().to_string(),
                        content: turn.content().to_string(),
                    };
                })
                .collect(),
        };

        let res = reqwest::Client::new()
            .post(self.endpoint("/api/chat"))
            .timeout(Duration::from_millis(self.request_timeout.parse::<u64>()?))
            .json(&req)
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "Failed to make chat request to agent");
                bail!("Unable to reach the agent: {err}");
            }
        };

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Agent chat request was not successful"
            );
            bail!(error_message(res).await);
        }

        let reply = res.json::<AgentReply>().await?;
        tracing::debug!(
            is_secret_revealed = reply.is_secret_revealed,
            "Chat response"
        );

        return Ok(reply);
    }
}
