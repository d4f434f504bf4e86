use crate::config::ClientConfig;

pub const ADMIN_API: &str = "admin";
pub const CONTENT_API: &str = "content";
pub const POSTS: &str = "posts";

// Ghost's router expects the trailing slash on every resource path.
impl ClientConfig {
    /// `/<prefix>/api/<version>/<api>/<resource>/<id>/`
    pub fn endpoint_for_id(&self, api: &str, resource: &str, id: &str) -> String {
        format!(
            "/{}/api/{}/{}/{}/{}/",
            self.path_prefix, self.version, api, resource, id
        )
    }

    /// `/<prefix>/api/<version>/<api>/<resource>/slug/<slug>/`
    pub fn endpoint_for_slug(&self, api: &str, resource: &str, slug: &str) -> String {
        format!(
            "/{}/api/{}/{}/{}/slug/{}/",
            self.path_prefix, self.version, api, resource, slug
        )
    }
}
