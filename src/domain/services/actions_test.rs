use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tempdir::TempDir;
use tokio::sync::mpsc;

use super::ActionsService;
use crate::domain::models::Action;
use crate::domain::models::AgentClient;
use crate::domain::models::AgentHealth;
use crate::domain::models::AgentReply;
use crate::domain::models::Event;
use crate::domain::models::Turn;
use crate::domain::services::ChannelRenderer;
use crate::domain::services::ConversationController;
use crate::domain::services::FileHistory;
use crate::domain::services::HistoryStore;

struct EchoAgent {}

#[async_trait]
impl AgentClient for EchoAgent {
    async fn health_check(&self) -> Result<AgentHealth> {
        bail!("connection refused");
    }

    async fn send_message(&self, message: &str, _context: &[Turn]) -> Result<AgentReply> {
        return Ok(AgentReply {
            response: format!("echo: {message}"),
            is_secret_revealed: false,
        });
    }
}

async fn next_matching(
    rx: &mut mpsc::UnboundedReceiver<Event>,
    matcher: fn(&Event) -> bool,
) -> Result<Event> {
    while let Some(event) = rx.recv().await {
        if matcher(&event) {
            return Ok(event);
        }
    }

    bail!("Event channel closed");
}

#[tokio::test]
async fn it_runs_actions_until_the_ui_hangs_up() -> Result<()> {
    let dir = TempDir::new("secretword")?;
    let history_path = dir.path().join("history.json");
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let controller = Arc::new(ConversationController::new(
        Box::new(FileHistory::new(history_path.clone())),
        Box::new(EchoAgent {}),
        Box::new(ChannelRenderer::new(event_tx)),
    ));
    let service = tokio::spawn(async move {
        return ActionsService::start(controller, &mut action_rx).await;
    });

    action_tx.send(Action::LoadConversation())?;
    let event = next_matching(&mut event_rx, |event| {
        return matches!(event, Event::Conversation(_));
    })
    .await?;
    assert!(matches!(event, Event::Conversation(turns) if turns.is_empty()));

    let event = next_matching(&mut event_rx, |event| {
        return matches!(event, Event::ErrorNotice(_));
    })
    .await?;
    assert!(matches!(event, Event::ErrorNotice(text) if text.contains("connection refused")));

    action_tx.send(Action::SubmitMessage("hi".to_string()))?;
    let event = next_matching(&mut event_rx, |event| {
        return matches!(event, Event::AgentTurn(_, _));
    })
    .await?;
    assert!(matches!(event, Event::AgentTurn(text, false) if text == "echo: hi"));

    action_tx.send(Action::ResetConversation())?;
    let event = next_matching(&mut event_rx, |event| {
        return matches!(event, Event::Conversation(_));
    })
    .await?;
    assert!(matches!(event, Event::Conversation(turns) if turns.is_empty()));

    drop(action_tx);
    service.await??;

    assert!(!FileHistory::new(history_path).has_history().await);

    return Ok(());
}
