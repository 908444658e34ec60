use std::collections::HashMap;

use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

struct BubbleCacheEntry {
    author: Author,
    mtype: MessageType,
    text: String,
    lines: Vec<Line<'static>>,
}

impl BubbleCacheEntry {
    fn matches(&self, message: &Message) -> bool {
        return self.author == message.author
            && self.mtype == message.message_type()
            && self.text == message.text;
    }
}

/// Renders the conversation as chat bubbles, caching each message's lines
/// until the message or the window width changes.
#[derive(Default)]
pub struct BubbleList {
    cache: HashMap<usize, BubbleCacheEntry>,
    line_width: usize,
    lines_len: usize,
}

impl BubbleList {
    pub fn set_messages(&mut self, messages: &[Message], line_width: usize) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }

        self.cache.retain(|idx, _| {
            return *idx < messages.len();
        });

        self.lines_len = messages
            .iter()
            .enumerate()
            .map(|(idx, message)| {
                if let Some(cache_entry) = self.cache.get(&idx) {
                    if cache_entry.matches(message) {
                        return cache_entry.lines.len();
                    }
                }

                let mut align = BubbleAlignment::Left;
                if message.author == Author::User {
                    align = BubbleAlignment::Right;
                }

                let bubble_lines = Bubble::new(message, align, line_width).as_lines();
                let bubble_line_len = bubble_lines.len();

                self.cache.insert(
                    idx,
                    BubbleCacheEntry {
                        author: message.author,
                        mtype: message.message_type(),
                        text: message.text.to_string(),
                        lines: bubble_lines,
                    },
                );

                return bubble_line_len;
            })
            .sum();
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn is_empty(&self) -> bool {
        return self.lines_len == 0;
    }

    pub fn widget(&self, scroll: u16) -> Paragraph<'static> {
        let mut indexes: Vec<usize> = self.cache.keys().cloned().collect();
        indexes.sort();
        let lines: Vec<Line<'static>> = indexes
            .iter()
            .filter_map(|idx| {
                return self.cache.get(idx);
            })
            .flat_map(|entry| {
                return entry.lines.to_owned();
            })
            .collect();

        return Paragraph::new(lines)
            .block(Block::default())
            .scroll((scroll, 0));
    }
}
