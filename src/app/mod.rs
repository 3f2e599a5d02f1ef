// Application layer: the terminal view and the interactive session around the controller.

pub mod command;
pub mod session;
pub mod view;

pub use command::Command;
pub use session::Session;
pub use view::TerminalView;
