pub mod actor;
pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod ui;

pub use error::{ActionError, CommandError};
