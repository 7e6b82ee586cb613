//! Chat front end: a closed command set, a client for the kadastr
//! HTTP API, and the message handler a chat transport drives.

pub mod api;
pub mod command;
pub mod handler;

pub use api::{ApiClient, ApiError};
pub use command::Command;
pub use handler::BotHandler;
