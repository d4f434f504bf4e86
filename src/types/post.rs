use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApiError, Author, Tag};

/// Envelope used for post reads and writes.
///
/// Ghost answers with either `posts` or `errors`; whichever key is missing
/// decodes as an empty list, and empty lists are left out when encoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub posts: Vec<Post>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
}

impl PostRequest {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            errors: Vec::new(),
        }
    }

    pub fn first_error(&self) -> Option<&ApiError> {
        self.errors.first()
    }

    /// Errors win over posts when Ghost sent both.
    pub fn into_result(self) -> Result<Vec<Post>, Vec<ApiError>> {
        if self.errors.is_empty() {
            Ok(self.posts)
        } else {
            Err(self.errors)
        }
    }
}

/// A post. Only fields that are `Some` are sent, so an update can touch a
/// single field; `Some(String::new())` clears a field on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Mobiledoc JSON, stored by Ghost as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobiledoc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Must be echoed back unchanged on update; Ghost uses it to detect
    /// concurrent edits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_tag: Option<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}
