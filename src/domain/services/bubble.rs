#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use super::format_line;
use super::spans_width;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

fn repeat_from_subtractions(text: &str, subtractions: Vec<usize>) -> String {
    let mut values = subtractions.into_iter();
    let first = values.next().unwrap_or_default() as i64;
    let count = values.fold(first, |acc, e| {
        return acc - e as i64;
    });

    if count <= 0 {
        return "".to_string();
    }

    return text.repeat(count as usize);
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, alignment: BubbleAlignment, window_max_width: usize) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // Unicode character border + padding.
            bubble_padding: 8,
            // left border + left padding + (text, not counted) + right padding + right border +
            // scrollbar.
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let max_line_length = self.get_max_line_length();

        let lines = self
            .message
            .as_string_lines(max_line_length)
            .iter()
            .map(|line| {
                return self.spans_to_line(format_line(line), max_line_length);
            })
            .collect();

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    fn title(&self) -> String {
        if self.message.message_type() == MessageType::SecretRevealed {
            return "Secret revealed!".to_string();
        }

        return self.message.author.to_string();
    }

    fn spans_to_line(&self, mut spans: Vec<Span<'static>>, max_line_length: usize) -> Line<'static> {
        let line_str_len = spans_width(&spans);
        let fill = repeat_from_subtractions(" ", vec![max_line_length, line_str_len]);
        let formatted_line_length =
            line_str_len + fill.len() + Bubble::style_config().bubble_padding;

        let mut wrapped_spans = vec![self.highlight_span("│ ".to_string())];
        wrapped_spans.append(&mut spans);
        wrapped_spans.push(self.highlight_span(format!("{fill} │")));

        let outer_bubble_padding =
            repeat_from_subtractions(" ", vec![self.window_max_width, formatted_line_length]);

        if self.alignment == BubbleAlignment::Left {
            wrapped_spans.push(Span::from(outer_bubble_padding));
            return Line::from(wrapped_spans);
        }

        let mut line_spans = vec![Span::from(outer_bubble_padding)];
        line_spans.extend(wrapped_spans);

        return Line::from(line_spans);
    }

    fn get_max_line_length(&self) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        // Border elements + minimum bubble padding.
        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;
        let available = self.window_max_width.saturating_sub(line_border_width).max(1);

        let mut max_line_length = self
            .message
            .text
            .lines()
            .map(|line| {
                return line.chars().count();
            })
            .max()
            .unwrap_or_default();

        if max_line_length > available {
            max_line_length = available;
        }

        let title_len = self.title().chars().count();
        if max_line_length < title_len {
            max_line_length = title_len;
        }

        return max_line_length;
    }

    fn wrap_lines_in_bubble(&self, lines: Vec<Line<'static>>, max_line_length: usize) -> Vec<Line<'static>> {
        // Add 2 for the vertical bars.
        let inner_bar = "─".repeat(max_line_length + 2);
        let top_left_border = "╭";
        let title = self.title();
        let top_replace = "─".repeat(title.chars().count());
        let top_bar = format!("{top_left_border}{inner_bar}╮").replacen(
            format!("{top_left_border}{top_replace}").as_str(),
            format!("{top_left_border}{title}").as_str(),
            1,
        );
        let bottom_bar = format!("╰{inner_bar}╯");
        let bar_bubble_padding = repeat_from_subtractions(
            " ",
            vec![
                self.window_max_width,
                max_line_length,
                Bubble::style_config().bubble_padding,
            ],
        );

        let mut res = vec![];
        if self.alignment == BubbleAlignment::Left {
            res.push(self.highlight_line(format!("{top_bar}{bar_bubble_padding}")));
            res.extend(lines);
            res.push(self.highlight_line(format!("{bottom_bar}{bar_bubble_padding}")));
        } else {
            res.push(self.highlight_line(format!("{bar_bubble_padding}{top_bar}")));
            res.extend(lines);
            res.push(self.highlight_line(format!("{bar_bubble_padding}{bottom_bar}")));
        }

        return res;
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        if self.message.message_type() == MessageType::SecretRevealed {
            return Span::styled(text, Style::default().fg(Color::Green));
        }

        match self.message.author {
            Author::SecretWord => {
                // Brown
                return Span::styled(text, Style::default().fg(Color::Rgb(138, 85, 63)));
            }
            Author::Agent => {
                return Span::styled(text, Style::default().fg(Color::Cyan));
            }
            Author::User => {
                return Span::from(text);
            }
        }
    }

    fn highlight_line(&self, text: String) -> Line<'static> {
        return Line::from(self.highlight_span(text));
    }
}
