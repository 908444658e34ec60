#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod tests;

use tui_textarea::Input;
use tui_textarea::Key;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirm,
    Dismiss,
}

/// Yes/no prompt shown on top of the conversation. It resolves to exactly one
/// outcome and closes itself once resolved.
#[derive(Clone, Debug)]
pub struct ConfirmDialog {
    pub prompt: String,
    open: bool,
}

impl ConfirmDialog {
    pub fn new(prompt: &str) -> ConfirmDialog {
        return ConfirmDialog {
            prompt: prompt.to_string(),
            open: false,
        };
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        return self.open;
    }

    pub fn resolve(&mut self, outcome: DialogOutcome) -> Option<DialogOutcome> {
        if !self.open {
            return None;
        }

        self.open = false;
        return Some(outcome);
    }

    /// Maps keyboard input to an outcome. Keys other than y/n/Enter/Esc leave
    /// the dialog open.
    pub fn handle_input(&mut self, input: &Input) -> Option<DialogOutcome> {
        match input {
            Input {
                key: Key::Char('y') | Key::Char('Y'),
                ctrl: false,
                ..
            }
            | Input {
                key: Key::Enter, ..
            } => {
                return self.resolve(DialogOutcome::Confirm);
            }
            Input {
                key: Key::Char('n') | Key::Char('N'),
                ctrl: false,
                ..
            }
            | Input { key: Key::Esc, .. } => {
                return self.resolve(DialogOutcome::Dismiss);
            }
            _ => {
                return None;
            }
        }
    }
}
