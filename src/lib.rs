//! Bindings for the Ghost Admin API.
//!
//! ```no_run
//! use ghost_admin::{Client, PostRequest, ADMIN_API, POSTS};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("https://blog.example.com", "id:0123abcd")?;
//! let path = client.endpoint_for_id(ADMIN_API, POSTS, "5c7ece47da174000c0c5c6d7");
//! let envelope: PostRequest = client.get(&path).await?.json().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod mobiledoc;
pub mod types;

pub use api::{Client, ADMIN_API, CONTENT_API, POSTS};
pub use config::{ClientConfig, Settings};
pub use error::{ClientError, Result};
pub use types::{bool, string, ApiError, Author, Post, PostRequest, Tag};
