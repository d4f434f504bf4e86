pub mod client;
pub mod endpoints;
pub mod token;

pub use client::Client;
pub use endpoints::{ADMIN_API, CONTENT_API, POSTS};
