//! Resource records exchanged with the Admin API.
//!
//! Every field is an `Option`: `None` is left out of the encoded JSON so
//! Ghost leaves the stored value alone, while `Some("")` clears it.

pub mod author;
pub mod error;
pub mod post;
pub mod tag;

pub use author::Author;
pub use error::ApiError;
pub use post::{Post, PostRequest};
pub use tag::Tag;

/// Shorthand for filling an optional string field.
pub fn string(v: impl Into<String>) -> Option<String> {
    Some(v.into())
}

/// Shorthand for filling an optional boolean field.
pub fn bool(v: bool) -> Option<bool> {
    Some(v)
}
