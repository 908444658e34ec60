#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Mutex;

use anyhow::anyhow;
use anyhow::Result;

use super::HistoryBox;
use crate::domain::models::AgentBox;
use crate::domain::models::AgentReply;
use crate::domain::models::RendererBox;
use crate::domain::models::SessionState;
use crate::domain::models::Turn;
use crate::domain::models::MAX_MESSAGE_LENGTH;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Blank input, or a request was already in flight.
    Skipped,
    /// The message was too long to send.
    Rejected,
    Answered(AgentReply),
    Failed(String),
    /// The conversation was reset while waiting, the reply was dropped.
    Discarded,
}

/// Holds the session in `AwaitingResponse` for as long as it lives.
struct InFlight<'a> {
    state: &'a Mutex<SessionState>,
}

impl<'a> InFlight<'a> {
    fn acquire(state: &'a Mutex<SessionState>) -> Option<InFlight<'a>> {
        let mut current = state.lock().unwrap_or_else(|err| return err.into_inner());
        if *current != SessionState::Idle {
            return None;
        }

        *current = SessionState::AwaitingResponse;
        return Some(InFlight { state });
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut current = self.state.lock().unwrap_or_else(|err| return err.into_inner());
        *current = SessionState::Idle;
    }
}

/// Owns the turn-by-turn lifecycle: what gets stored, what the agent is sent
/// and what the user interface is told.
pub struct ConversationController {
    agent: AgentBox,
    generation: AtomicU64,
    history: HistoryBox,
    renderer: RendererBox,
    state: Mutex<SessionState>,
}

impl ConversationController {
    pub fn new(
        history: HistoryBox,
        agent: AgentBox,
        renderer: RendererBox,
    ) -> ConversationController {
        return ConversationController {
            agent,
            generation: AtomicU64::new(0),
            history,
            renderer,
            state: Mutex::new(SessionState::Idle),
        };
    }

    pub fn session_state(&self) -> SessionState {
        return *self.state.lock().unwrap_or_else(|err| return err.into_inner());
    }

    /// Renders the stored conversation, used once at startup.
    pub async fn load_conversation(&self) -> Result<()> {
        let turns = self.history.load().await;
        tracing::debug!(turns = turns.len(), "Loaded conversation");
        self.renderer.render_conversation(&turns)?;

        return Ok(());
    }

    /// Checks the agent is reachable, telling the user when it isn't.
    pub async fn check_agent(&self) -> Result<bool> {
        if let Err(err) = self.agent.health_check().await {
            tracing::warn!(error = ?err, "Agent health check failed");
            self.renderer.show_error(&format!(
                "The agent isn't reachable right now, messages may fail until it is. {err}"
            ))?;
            return Ok(false);
        }

        return Ok(true);
    }

    /// Current reset generation. Intents captured before a reset carry an
    /// older value.
    pub fn generation(&self) -> u64 {
        return self.generation.load(Ordering::SeqCst);
    }

    pub async fn submit_user_message(&self, text: &str) -> Result<Submission> {
        return self.submit_for_generation(text, self.generation()).await;
    }

    /// Submits a message typed while `generation` was current. When a reset
    /// happened since, nothing is stored or sent.
    pub async fn submit_for_generation(&self, text: &str, generation: u64) -> Result<Submission> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Submission::Skipped);
        }

        let in_flight = match InFlight::acquire(&self.state) {
            Some(in_flight) => in_flight,
            None => {
                tracing::debug!("Submission skipped, a request is already in flight");
                return Ok(Submission::Skipped);
            }
        };

        if text.chars().count() > MAX_MESSAGE_LENGTH {
            self.renderer.show_error(&format!(
                "Messages are limited to {MAX_MESSAGE_LENGTH} characters."
            ))?;
            return Ok(Submission::Rejected);
        }

        let res = self.run_turn(text, generation).await;

        drop(in_flight);
        self.renderer.set_working(false)?;

        return res;
    }

    async fn run_turn(&self, text: &str, generation: u64) -> Result<Submission> {
        if self.generation() != generation {
            tracing::warn!("Conversation was reset before sending, dropping the message");
            return Ok(Submission::Discarded);
        }

        let user_turn = Turn::user(text)?;

        // The context is everything stored before this turn.
        let context = self.history.load().await;
        self.history.append(user_turn).await;
        self.renderer.append_user_turn(text)?;

        self.renderer.set_working(true)?;
        tracing::info!(context = context.len(), "Sending message to agent");

        let res = self.agent.send_message(text, &context).await;

        if self.generation() != generation {
            tracing::warn!("Conversation was reset while waiting, discarding the reply");
            return Ok(Submission::Discarded);
        }

        let (reply, agent_turn) = match res.and_then(|reply| {
            let agent_turn = Turn::agent(&reply.response)
                .map_err(|_| return anyhow!("The agent sent back an empty reply."))?;
            return Ok((reply, agent_turn));
        }) {
            Ok(pair) => pair,
            Err(err) => {
                tracing::error!(error = ?err, "Agent request failed");
                let msg = err.to_string();
                self.renderer.show_error(&msg)?;

                return Ok(Submission::Failed(msg));
            }
        };

        self.history.append(agent_turn).await;

        if reply.is_secret_revealed {
            tracing::info!("Secret word was revealed");
        }

        self.renderer
            .append_agent_turn(&reply.response, reply.is_secret_revealed)?;

        return Ok(Submission::Answered(reply));
    }

    /// Erases the stored conversation. A reply still in flight is dropped when
    /// it arrives.
    pub async fn reset_conversation(&self) -> Result<()> {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.history.clear().await;
        tracing::info!("Conversation reset");

        self.renderer.render_conversation(&[])?;

        return Ok(());
    }
}
