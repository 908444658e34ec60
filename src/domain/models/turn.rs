#[cfg(test)]
#[path = "turn_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Error;
use anyhow::Result;
use serde_derive::Deserialize;
use serde_derive::Serialize;

/// The chat endpoint refuses messages longer than this many characters.
pub const MAX_MESSAGE_LENGTH: usize = 4000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Role {
    #[serde(rename = "user")]
    #[strum(serialize = "user")]
    User,
    #[serde(rename = "assistant", alias = "agent")]
    #[strum(serialize = "assistant")]
    Agent,
}

#[derive(Deserialize)]
struct TurnRecord {
    role: Role,
    content: String,
}

/// A single message in the dialogue. Turns are validated on construction and
/// never change afterwards, so a `Turn` value is always safe to persist or send.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TurnRecord")]
pub struct Turn {
    role: Role,
    content: String,
}

impl TryFrom<TurnRecord> for Turn {
    type Error = Error;

    fn try_from(record: TurnRecord) -> Result<Turn> {
        return Turn::new(record.role, &record.content);
    }
}

impl Turn {
    pub fn new(role: Role, content: &str) -> Result<Turn> {
        if content.trim().is_empty() {
            bail!("Turn content must not be empty");
        }

        return Ok(Turn {
            role,
            content: content.to_string(),
        });
    }

    pub fn user(content: &str) -> Result<Turn> {
        return Turn::new(Role::User, content);
    }

    pub fn agent(content: &str) -> Result<Turn> {
        return Turn::new(Role::Agent, content);
    }

    pub fn role(&self) -> Role {
        return self.role;
    }

    pub fn content(&self) -> &str {
        return &self.content;
    }
}
