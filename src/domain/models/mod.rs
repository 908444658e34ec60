mod action;
mod agent;
mod author;
mod confirm_dialog;
mod event;
mod loading;
mod message;
mod notice;
mod renderer;
mod session_state;
mod textarea;
mod turn;

pub use action::*;
pub use agent::*;
pub use author::*;
pub use confirm_dialog::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use notice::*;
pub use renderer::*;
pub use session_state::*;
pub use textarea::*;
pub use turn::*;
