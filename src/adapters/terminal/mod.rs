//! Terminal frontends implementing the QuizFrontend port.

mod dialoguer_frontend;
mod scripted_frontend;

pub use dialoguer_frontend::DialoguerFrontend;
pub use scripted_frontend::ScriptedFrontend;
