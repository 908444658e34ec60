#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

/// Vertical scroll position of the conversation. While pinned to the bottom
/// new messages keep the latest one in view.
#[derive(Default)]
pub struct Scroll {
    list_length: u16,
    viewport_length: u16,
    pinned: bool,
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    fn max_position(&self) -> u16 {
        return self.list_length.saturating_sub(self.viewport_length);
    }

    fn page_size(&self) -> u16 {
        return self.viewport_length.saturating_sub(1).max(1);
    }

    fn sync_scrollbar(&mut self) {
        self.pinned = self.position >= self.max_position();
        self.scrollbar_state = self.scrollbar_state.position(self.position);
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.sync_scrollbar();
    }

    pub fn up_page(&mut self) {
        self.position = self.position.saturating_sub(self.page_size());
        self.sync_scrollbar();
    }

    pub fn down(&mut self) {
        self.position = self.position.saturating_add(1).min(self.max_position());
        self.sync_scrollbar();
    }

    pub fn down_page(&mut self) {
        self.position = self
            .position
            .saturating_add(self.page_size())
            .min(self.max_position());
        self.sync_scrollbar();
    }

    pub fn last(&mut self) {
        self.position = self.max_position();
        self.sync_scrollbar();
    }

    pub fn is_pinned(&self) -> bool {
        return self.pinned;
    }

    /// Updates the content and viewport sizes. Follows the bottom when it was
    /// already there, otherwise keeps the position within bounds.
    pub fn set_state(&mut self, list_length: u16, viewport_length: u16) {
        let follow = self.pinned || self.list_length == 0;
        self.list_length = list_length;
        self.viewport_length = viewport_length;
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(list_length)
            .viewport_content_length(viewport_length);

        if follow {
            self.last();
            return;
        }

        self.position = self.position.min(self.max_position());
        self.sync_scrollbar();
    }
}
