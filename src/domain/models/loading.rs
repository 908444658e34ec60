use ratatui::prelude::Alignment;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;

const FRAMES: [&str; 4] = ["   ", ".  ", ".. ", "..."];

#[derive(Default)]
pub struct Loading {
    frame: usize,
}

impl Loading {
    /// Advances the trailing dots, called on every UI tick.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn widget(&self) -> Paragraph<'static> {
        return Paragraph::new(format!("Waiting for the agent{}", FRAMES[self.frame]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .alignment(Alignment::Center);
    }
}
