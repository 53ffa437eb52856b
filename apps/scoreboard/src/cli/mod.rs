// Interactive front end
//
// Translates typed commands into ScoreBoard calls and renders the replies.
// Nothing in the domain depends on this module.

pub mod command;
pub mod errors;
pub mod render;
pub mod session;

pub use command::Command;
pub use errors::CommandError;
pub use session::{Reply, Session};
