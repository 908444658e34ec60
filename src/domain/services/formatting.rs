#[cfg(test)]
#[path = "formatting_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Span;

struct Marker {
    delimiter: &'static str,
    style: Style,
}

fn markers() -> [Marker; 3] {
    return [
        Marker {
            delimiter: "**",
            style: Style::default().add_modifier(Modifier::BOLD),
        },
        Marker {
            delimiter: "`",
            style: Style::default().fg(Color::Yellow),
        },
        Marker {
            delimiter: "*",
            style: Style::default().add_modifier(Modifier::ITALIC),
        },
    ];
}

/// Splits a single display line into styled spans. Supports `**bold**`,
/// `` `code` `` and `*italic*`. Markers never span lines, and an unclosed
/// marker is kept as literal text.
pub fn format_line(line: &str) -> Vec<Span<'static>> {
    let markers = markers();
    let mut spans: Vec<Span<'static>> = vec![];
    let mut plain = String::new();
    let mut rest = line;

    'outer: while !rest.is_empty() {
        for marker in markers.iter() {
            let Some(after_open) = rest.strip_prefix(marker.delimiter) else {
                continue;
            };

            let Some(close_idx) = after_open.find(marker.delimiter) else {
                continue;
            };

            let inner = &after_open[..close_idx];
            if inner.trim().is_empty() {
                continue;
            }

            if !plain.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut plain)));
            }
            spans.push(Span::styled(inner.to_string(), marker.style));

            rest = &after_open[close_idx + marker.delimiter.len()..];
            continue 'outer;
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            plain.push(ch);
        }
        rest = chars.as_str();
    }

    if !plain.is_empty() || spans.is_empty() {
        spans.push(Span::raw(plain));
    }

    return spans;
}

/// Display width of formatted spans, markers excluded.
pub fn spans_width(spans: &[Span]) -> usize {
    return spans
        .iter()
        .map(|span| {
            return span.content.chars().count();
        })
        .sum();
}
