pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
mod channel_renderer;
mod controller;
pub mod events;
mod formatting;
mod history;
mod scroll;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use channel_renderer::*;
pub use controller::*;
pub use formatting::*;
pub use history::*;
pub use scroll::*;
