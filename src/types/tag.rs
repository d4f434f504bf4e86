use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post tag. `parent` is an owned copy of the parent tag as Ghost
/// returned it, not a link into any shared tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TagWire")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Tag>>,
}

// Older Ghost releases send `featured_image`; some send both keys.
#[derive(Deserialize)]
struct TagWire {
    id: Option<String>,
    name: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    feature_image: Option<String>,
    featured_image: Option<String>,
    visibility: Option<String>,
    meta_title: Option<String>,
    meta_description: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    parent: Option<Box<Tag>>,
}

impl From<TagWire> for Tag {
    fn from(wire: TagWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            slug: wire.slug,
            description: wire.description,
            feature_image: wire.feature_image.or(wire.featured_image),
            visibility: wire.visibility,
            meta_title: wire.meta_title,
            meta_description: wire.meta_description,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            parent: wire.parent,
        }
    }
}

impl Tag {
    /// Walks `parent` links up to the root, starting with `self`.
    pub fn ancestry(&self) -> impl Iterator<Item = &Tag> {
        std::iter::successors(Some(self), |tag| tag.parent.as_deref())
    }
}
