//! This crate contains the HTTP surface shared by the site, the server, and the CLI.

pub mod client;
#[cfg(feature = "server")]
pub mod routes;

pub use client::HttpQuoteClient;
#[cfg(feature = "server")]
pub use routes::{router, AppState};

/// Path of the mail relay endpoint
pub const SEND_MAIL_PATH: &str = "/api/send-mail";
