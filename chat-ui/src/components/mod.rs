pub mod chat;
pub mod header;
pub mod input_bar;
pub mod panel;
pub mod shell;
pub mod styles;

pub use chat::*;
pub use header::*;
pub use input_bar::*;
pub use panel::*;
pub use shell::*;
