use std::io;
use std::time::Duration;
use std::time::Instant;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::DialogOutcome;
use crate::domain::models::Event;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::InputSubmission;

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    return Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
}

fn dialog_widget(prompt: &str) -> Paragraph<'static> {
    return Paragraph::new(vec![
        Line::from(prompt.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().add_modifier(Modifier::BOLD)),
            Span::from(" Yes    "),
            Span::styled("[n]", Style::default().add_modifier(Modifier::BOLD)),
            Span::from(" No"),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title("Clear conversation"),
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
}

fn notice_widget(text: &str) -> Paragraph<'static> {
    return Paragraph::new(format!("✗ {text}")).style(Style::default().fg(Color::Red));
}

/// Converts keyboard events into dialog input while the confirmation is open.
fn dialog_input(event: &Event) -> Option<Input> {
    match event {
        Event::KeyboardEnter() => {
            return Some(Input {
                key: Key::Enter,
                ctrl: false,
                alt: false,
            });
        }
        Event::KeyboardEsc() => {
            return Some(Input {
                key: Key::Esc,
                ctrl: false,
                alt: false,
            });
        }
        Event::KeyboardCharInput(input) => {
            return Some(input.clone());
        }
        _ => {
            return None;
        }
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::default();

    tx.send(Action::LoadConversation())?;

    loop {
        terminal.draw(|frame| {
            let mut notice_height = 0;
            if app_state.notice.is_some() {
                notice_height = 1;
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Min(1),
                    Constraint::Length(notice_height),
                    Constraint::Max(4),
                ])
                .split(frame.size());

            if layout[0].width != app_state.last_known_width
                || layout[0].height != app_state.last_known_height
            {
                app_state.set_rect(layout[0]);
            }

            frame.render_widget(
                app_state.bubble_list.widget(app_state.scroll.position),
                layout[0],
            );
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[0].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if let Some(notice) = &app_state.notice {
                frame.render_widget(notice_widget(&notice.text), layout[1]);
            }

            if app_state.waiting_for_agent {
                frame.render_widget(app_state.loading.widget(), layout[2]);
            } else {
                frame.render_widget(textarea.widget(), layout[2]);
            }

            if app_state.confirm.is_open() {
                let area = centered_rect(50, 7, frame.size());
                frame.render_widget(Clear, area);
                frame.render_widget(dialog_widget(&app_state.confirm.prompt), area);
            }
        })?;

        let event = events.next().await?;

        if app_state.confirm.is_open() {
            if let Some(input) = dialog_input(&event) {
                if app_state.confirm.handle_input(&input) == Some(DialogOutcome::Confirm) {
                    tx.send(Action::ResetConversation())?;
                }
                continue;
            }
        }

        match event {
            Event::Conversation(turns) => {
                app_state.set_conversation(&turns);
            }
            Event::UserTurn(text) => {
                app_state.add_user_turn(&text);
            }
            Event::AgentTurn(text, is_secret_revealed) => {
                app_state.add_agent_turn(&text, is_secret_revealed);
            }
            Event::Working(working) => {
                app_state.set_working(working);
            }
            Event::ErrorNotice(text) => {
                app_state.show_notice(&text, Instant::now());
            }
            Event::UITick() => {
                app_state.tick(Instant::now());
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLL() => {
                app_state.confirm.open();
            }
            Event::KeyboardEsc() => {}
            Event::KeyboardEnter() => {
                let input_str = textarea.lines().join("\n");
                match app_state.submit_input(&input_str) {
                    InputSubmission::Ignored => {
                        continue;
                    }
                    InputSubmission::Send => {
                        textarea = TextArea::default();
                    }
                    InputSubmission::SendAndKeep => {}
                }

                tx.send(Action::SubmitMessage(input_str))?;
            }
            Event::KeyboardPaste(text) => {
                if app_state.waiting_for_agent {
                    continue;
                }

                for ch in text.chars() {
                    if ch == '\n' {
                        textarea.insert_newline();
                    } else if ch != '\r' {
                        textarea.insert_char(ch);
                    }
                }
            }
            Event::KeyboardCharInput(input) => {
                if app_state.waiting_for_agent {
                    continue;
                }

                textarea.input(input);
            }
        }
    }

    return Ok(());
}

/// Restores the terminal without failing, used when panicking or bailing out
/// with an error.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let notice_duration =
        Duration::from_millis(Config::get(ConfigKey::NoticeDuration).parse::<u64>()?);
    let mut app_state = AppState::new(notice_duration);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
