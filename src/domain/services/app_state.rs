#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::time::Duration;
use std::time::Instant;

use ratatui::prelude::Rect;

use super::BubbleList;
use super::Scroll;
use crate::domain::models::Author;
use crate::domain::models::ConfirmDialog;
use crate::domain::models::Loading;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Notice;
use crate::domain::models::Turn;
use crate::domain::models::MAX_MESSAGE_LENGTH;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputSubmission {
    /// Nothing to send, or a reply is still pending.
    Ignored,
    /// Send it and clear the input.
    Send,
    /// Send it but keep the input, it will be rejected as too long.
    SendAndKeep,
}

pub struct AppState {
    pub bubble_list: BubbleList,
    pub confirm: ConfirmDialog,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub loading: Loading,
    pub messages: Vec<Message>,
    pub notice: Option<Notice>,
    pub scroll: Scroll,
    pub waiting_for_agent: bool,
    notice_duration: Duration,
    showing_welcome: bool,
}

impl AppState {
    pub fn new(notice_duration: Duration) -> AppState {
        return AppState {
            bubble_list: BubbleList::default(),
            confirm: ConfirmDialog::new("Clear the conversation? This can't be undone."),
            last_known_height: 0,
            last_known_width: 0,
            loading: Loading::default(),
            messages: vec![Message::welcome()],
            notice: None,
            notice_duration,
            scroll: Scroll::default(),
            showing_welcome: true,
            waiting_for_agent: false,
        };
    }

    /// Replaces everything displayed with the stored conversation, falling
    /// back to the welcome message when it is empty.
    pub fn set_conversation(&mut self, turns: &[Turn]) {
        self.messages = turns.iter().map(Message::from_turn).collect();
        self.showing_welcome = self.messages.is_empty();
        if self.showing_welcome {
            self.messages.push(Message::welcome());
        }

        self.sync_dependants();
        self.scroll.last();
    }

    pub fn add_message(&mut self, message: Message) {
        if self.showing_welcome {
            self.messages.clear();
            self.showing_welcome = false;
        }

        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn add_user_turn(&mut self, text: &str) {
        self.add_message(Message::new(Author::User, text));
    }

    pub fn add_agent_turn(&mut self, text: &str, is_secret_revealed: bool) {
        let mut mtype = MessageType::Normal;
        if is_secret_revealed {
            mtype = MessageType::SecretRevealed;
        }

        self.add_message(Message::new_with_type(Author::Agent, mtype, text));
    }

    pub fn set_working(&mut self, working: bool) {
        self.waiting_for_agent = working;
        self.loading = Loading::default();
    }

    /// Decides what Enter does with the typed text. Input is locked as soon
    /// as a message goes out, before the controller reports it is working.
    pub fn submit_input(&mut self, input: &str) -> InputSubmission {
        if self.waiting_for_agent || input.trim().is_empty() {
            return InputSubmission::Ignored;
        }

        if input.trim().chars().count() > MAX_MESSAGE_LENGTH {
            return InputSubmission::SendAndKeep;
        }

        self.set_working(true);
        return InputSubmission::Send;
    }

    pub fn show_notice(&mut self, text: &str, now: Instant) {
        self.notice = Some(Notice::new(text, now, self.notice_duration));
    }

    /// Expires the error notice and animates the loading box.
    pub fn tick(&mut self, now: Instant) {
        if let Some(notice) = &self.notice {
            if notice.is_expired(now) {
                self.notice = None;
            }
        }

        if self.waiting_for_agent {
            self.loading.tick();
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.messages, self.last_known_width.into());

        let lines_len = u16::try_from(self.bubble_list.len()).unwrap_or(u16::MAX);
        self.scroll.set_state(lines_len, self.last_known_height);
    }
}
