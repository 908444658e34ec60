#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use super::Author;
use super::Role;
use super::Turn;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    Normal,
    SecretRevealed,
}

/// A message as displayed in the chat window. Unlike a `Turn` it also covers
/// the welcome text and carries the presentation-only reveal flag.
#[derive(Clone, Debug)]
pub struct Message {
    pub author: Author,
    pub text: String,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            author,
            text: text.replace('\t', "  "),
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            author,
            text: text.replace('\t', "  "),
            mtype,
        };
    }

    pub fn from_turn(turn: &Turn) -> Message {
        let author = match turn.role() {
            Role::User => Author::User,
            Role::Agent => Author::Agent,
        };

        return Message::new(author, turn.content());
    }

    pub fn welcome() -> Message {
        return Message::new(
            Author::SecretWord,
            "The agent is guarding a secret word. Convince it to tell you!\n\nEnter to send, Ctrl+L to clear the conversation, Ctrl+C to quit.",
        );
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_lines: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                let word_len = word.chars().count();
                if !current_lines.is_empty() && word_len + char_count > line_max_width {
                    lines.push(current_lines.join(" ").trim_end().to_string());
                    current_lines = vec![word];
                    char_count = word_len + 1;
                } else {
                    current_lines.push(word);
                    char_count += word_len + 1;
                }
            }
            if !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}
