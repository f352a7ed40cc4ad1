//! Chat surface core
//!
//! State that the Dioxus screen keeps in signals, written as plain Rust so it
//! can be driven and tested without a browser:
//! - `layout`: device class / login / panel visibility and the reserved panel width
//! - `conversation`: the transcript and the send protocol
//! - `gateway`: the seam to the inference endpoint
//! - `input`: the input bar's text buffer and autosize height
//! - `history`: date-bucket grouping for the side panel
//! - `panel`: fire-and-forget commands raised by the side panel

pub mod conversation;
pub mod gateway;
pub mod history;
pub mod input;
pub mod layout;
pub mod panel;

pub use conversation::*;
pub use gateway::*;
pub use history::*;
pub use input::*;
pub use layout::*;
pub use panel::*;
