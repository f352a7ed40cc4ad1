pub mod api;
pub mod components;
pub mod conversation;
pub mod history;
pub mod interop;
pub mod layout;

pub use api::*;
pub use components::*;
pub use conversation::*;
pub use layout::*;
