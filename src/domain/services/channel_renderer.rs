use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Event;
use crate::domain::models::Renderer;
use crate::domain::models::Turn;

/// Forwards everything the controller renders to the UI loop as events.
pub struct ChannelRenderer {
    tx: mpsc::UnboundedSender<Event>,
}

impl ChannelRenderer {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> ChannelRenderer {
        return ChannelRenderer { tx };
    }
}

impl Renderer for ChannelRenderer {
    fn append_user_turn(&self, text: &str) -> Result<()> {
        self.tx.send(Event::UserTurn(text.to_string()))?;
        return Ok(());
    }

    fn append_agent_turn(&self, text: &str, is_secret_revealed: bool) -> Result<()> {
        self.tx
            .send(Event::AgentTurn(text.to_string(), is_secret_revealed))?;
        return Ok(());
    }

    fn set_working(&self, working: bool) -> Result<()> {
        self.tx.send(Event::Working(working))?;
        return Ok(());
    }

    fn show_error(&self, text: &str) -> Result<()> {
        self.tx.send(Event::ErrorNotice(text.to_string()))?;
        return Ok(());
    }

    fn render_conversation(&self, turns: &[Turn]) -> Result<()> {
        self.tx.send(Event::Conversation(turns.to_vec()))?;
        return Ok(());
    }
}
