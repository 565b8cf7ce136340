//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::Hero;

mod footer;
pub use footer::Footer;

/// Origin of the mail relay the quote form posts to
pub const RELAY_BASE_URL: &str = match option_env!("ONEISOK_RELAY_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8080",
};
