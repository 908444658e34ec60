use tui_textarea::Input;

use super::Turn;

pub enum Event {
    AgentTurn(String, bool),
    Conversation(Vec<Turn>),
    ErrorNotice(String),
    UserTurn(String),
    Working(bool),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLL(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
