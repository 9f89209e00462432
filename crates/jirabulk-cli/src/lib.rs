//! jirabulk CLI library
//!
//! Menu loop and terminal plumbing, exposed as a library for testing.

pub mod app;
pub mod logging;
pub mod startup;
pub mod terminal;

pub use app::{App, MenuChoice, Outcome};
pub use startup::Startup;
pub use terminal::TerminalPrompter;
