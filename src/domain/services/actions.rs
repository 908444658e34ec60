#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::ConversationController;
use super::Submission;
use crate::domain::models::Action;

async fn submit(controller: Arc<ConversationController>, text: String, generation: u64) {
    match controller.submit_for_generation(&text, generation).await {
        Ok(Submission::Answered(reply)) => {
            tracing::debug!(
                is_secret_revealed = reply.is_secret_revealed,
                "Message answered"
            );
        }
        Ok(submission) => {
            tracing::debug!(submission = ?submission, "Message not answered");
        }
        Err(err) => {
            tracing::error!(error = ?err, "Failed to submit message");
        }
    }
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs user intents against the controller until the UI hangs up. Each
    /// message gets its own worker so a reset isn't stuck behind a slow agent.
    pub async fn start(
        controller: Arc<ConversationController>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let mut workers: Vec<JoinHandle<()>> = vec![];

        while let Some(action) = rx.recv().await {
            workers.retain(|worker| {
                return !worker.is_finished();
            });

            match action {
                Action::LoadConversation() => {
                    controller.load_conversation().await?;
                    controller.check_agent().await?;
                }
                Action::SubmitMessage(text) => {
                    let generation = controller.generation();
                    workers.push(tokio::spawn(submit(controller.clone(), text, generation)));
                }
                Action::ResetConversation() => {
                    controller.reset_conversation().await?;
                }
            }
        }

        for worker in workers.iter() {
            worker.abort();
        }

        return Ok(());
    }
}
