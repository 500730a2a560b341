// Shell module
// Interactive menu loop and command dispatch

pub mod command;
pub mod session;

pub use command::Command;
pub use session::Session;
