use anyhow::Result;

use super::Turn;

/// Everything the conversation controller tells the user interface. A
/// renderer only ever reflects state, it never writes history.
pub trait Renderer {
    fn append_user_turn(&self, text: &str) -> Result<()>;

    fn append_agent_turn(&self, text: &str, is_secret_revealed: bool) -> Result<()>;

    /// Shows or withdraws the progress affordance. Withdrawing it also gives
    /// input back to the user.
    fn set_working(&self, working: bool) -> Result<()>;

    /// Shows a transient notice that dismisses itself.
    fn show_error(&self, text: &str) -> Result<()>;

    /// Replaces everything displayed with the given turns. An empty slice
    /// shows the empty conversation welcome.
    fn render_conversation(&self, turns: &[Turn]) -> Result<()>;
}

pub type RendererBox = Box<dyn Renderer + Send + Sync>;
