/// alertmail - formats monitoring notifications as raw HTML email
///
/// This library turns the environment macros exported by a monitoring daemon
/// into a ready-to-send message (headers plus HTML body) for piping into a
/// mailer.
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod environment;
pub mod formatting;
pub mod outputs;
pub mod subject;
pub mod updates;

// Re-export core types for convenience
pub use crate::core::*;
