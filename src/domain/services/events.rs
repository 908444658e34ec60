#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

const TICK_MS: u64 = 250;

/// Maps a key press to what the UI does with it. Anything without a binding
/// goes to the text area.
pub fn map_input(input: Input) -> Event {
    match input {
        Input {
            key: Key::Up | Key::MouseScrollUp,
            ..
        } => {
            return Event::UIScrollUp();
        }
        Input {
            key: Key::Down | Key::MouseScrollDown,
            ..
        } => {
            return Event::UIScrollDown();
        }
        Input {
            key: Key::PageUp, ..
        }
        | Input {
            key: Key::Char('u'),
            ctrl: true,
            ..
        } => {
            return Event::UIScrollPageUp();
        }
        Input {
            key: Key::PageDown,
            ..
        }
        | Input {
            key: Key::Char('d'),
            ctrl: true,
            ..
        } => {
            return Event::UIScrollPageDown();
        }
        Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } => {
            return Event::KeyboardCTRLC();
        }
        Input {
            key: Key::Char('l'),
            ctrl: true,
            ..
        } => {
            return Event::KeyboardCTRLL();
        }
        Input { key: Key::Esc, .. } => {
            return Event::KeyboardEsc();
        }
        Input {
            key: Key::Enter, ..
        } => {
            return Event::KeyboardEnter();
        }
        input => {
            return Event::KeyboardCharInput(input);
        }
    }
}

/// Merges terminal input, controller events and a periodic tick into a single
/// stream for the UI loop.
pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => {
                return Some(Event::KeyboardPaste(text));
            }
            CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
                MouseEventKind::ScrollUp => {
                    return Some(Event::UIScrollUp());
                }
                MouseEventKind::ScrollDown => {
                    return Some(Event::UIScrollDown());
                }
                _ => {
                    return None;
                }
            },
            CrosstermEvent::Key(keyevent) => {
                return Some(map_input(keyevent.into()));
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(err)) => {
                        tracing::error!(error = ?err, "Failed to read terminal event");
                        None
                    },
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(TICK_MS)) => Some(Event::UITick())
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
