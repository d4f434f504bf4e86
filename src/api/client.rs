use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request, Response};
use serde::Serialize;
use tracing::debug;

use super::token;
use crate::config::ClientConfig;
use crate::error::Result;

/// Client for a single Ghost site.
///
/// Cloning is cheap and clones share the underlying connection pool, so a
/// `Client` can be handed to as many tasks as needed without extra locking.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client with the default version, path prefix and timeout.
    ///
    /// The key is only checked when a request is signed. This fails only
    /// if the HTTP transport itself cannot be initialised.
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(url, key))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { config, http })
    }

    /// Uses a caller-supplied transport; its timeout and proxy settings are
    /// used as-is and `config.timeout_ms` is ignored.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Signs a new admin token. Fails with `MalformedCredential` when no
    /// key is configured.
    pub fn generate_token(&self) -> Result<String> {
        let key = self.config.key.as_deref().unwrap_or_default();
        token::generate_token(key, &self.config.version)
    }

    pub fn endpoint_for_id(&self, api: &str, resource: &str, id: &str) -> String {
        self.config.endpoint_for_id(api, resource, id)
    }

    pub fn endpoint_for_slug(&self, api: &str, resource: &str, slug: &str) -> String {
        self.config.endpoint_for_slug(api, resource, slug)
    }

    /// Assembles a request without sending it.
    ///
    /// `path` is appended verbatim to the base URL. When a key is configured
    /// a fresh token is signed and any signing failure is returned before a
    /// request exists.
    pub fn build_request<T>(&self, method: Method, path: &str, body: Option<&T>) -> Result<Request>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.config.url, path);

        let mut builder = self
            .http
            .request(method, url)
            .header(USER_AGENT, self.config.user_agent())
            .header(CONTENT_TYPE, "application/json");

        if let Some(key) = self.config.key.as_deref() {
            let token = token::generate_token(key, &self.config.version)?;
            builder = builder.header(AUTHORIZATION, format!("Ghost {token}"));
        }

        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        Ok(builder.build()?)
    }

    /// Sends one request and hands back the raw response. Non-2xx statuses
    /// are not treated as errors.
    pub async fn request<T>(&self, method: Method, path: &str, body: Option<&T>) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, body)?;
        debug!(
            method = %request.method(),
            url = %request.url(),
            authenticated = request.headers().contains_key(AUTHORIZATION),
            "sending admin api request"
        );

        let response = self.http.execute(request).await?;
        debug!(status = %response.status(), url = %response.url(), "admin api response");
        Ok(response)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request::<()>(Method::GET, path, None).await
    }

    pub async fn post<T>(&self, path: &str, body: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<T>(&self, path: &str, body: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.request::<()>(Method::DELETE, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::types::{Post, PostRequest};
    use serde::ser::Error as _;
    use serde::Serializer;

    const KEY: &str = "6489:0123456789abcdef0123456789abcdef";

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    #[test]
    fn test_no_key_no_authorization_header() {
        let client = Client::new("https://blog.example.com", "").unwrap();
        let request = client
            .build_request::<()>(Method::GET, "/ghost/api/v2/admin/posts/", None)
            .unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(
            request.url().as_str(),
            "https://blog.example.com/ghost/api/v2/admin/posts/"
        );
        assert!(request.body().is_none());
    }

    #[test]
    fn test_key_adds_ghost_authorization() {
        let client = Client::new("https://blog.example.com", KEY).unwrap();
        let request = client
            .build_request::<()>(Method::GET, "/ghost/api/v2/admin/posts/1/", None)
            .unwrap();

        let auth = request.headers()[AUTHORIZATION].to_str().unwrap();
        let token = auth.strip_prefix("Ghost ").unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_default_and_custom_user_agent() {
        let client = Client::new("https://blog.example.com", "").unwrap();
        let request = client.build_request::<()>(Method::GET, "/", None).unwrap();
        assert_eq!(
            request.headers()[USER_AGENT],
            crate::config::client::DEFAULT_USER_AGENT
        );

        let config = ClientConfig::new("https://blog.example.com", "").with_user_agent("sample 1.0");
        let client = Client::from_config(config).unwrap();
        let request = client.build_request::<()>(Method::GET, "/", None).unwrap();
        assert_eq!(request.headers()[USER_AGENT], "sample 1.0");
    }

    #[test]
    fn test_body_is_json() {
        let client = Client::new("https://blog.example.com", "").unwrap();
        let payload = PostRequest::new(vec![Post {
            title: crate::string("Hello"),
            ..Default::default()
        }]);
        let request = client
            .build_request(Method::PUT, "/ghost/api/v2/admin/posts/1/", Some(&payload))
            .unwrap();

        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(bytes, br#"{"posts":[{"title":"Hello"}]}"#);
        assert_eq!(request.method(), Method::PUT);
    }

    #[test]
    fn test_malformed_key_aborts_request() {
        let client = Client::new("https://blog.example.com", "no-separator").unwrap();
        let err = client
            .build_request::<()>(Method::GET, "/", None)
            .unwrap_err();
        assert!(matches!(err, ClientError::MalformedCredential));
    }

    #[test]
    fn test_bad_hex_aborts_request() {
        let client = Client::new("https://blog.example.com", "id:zz").unwrap();
        let err = client
            .build_request::<()>(Method::GET, "/", None)
            .unwrap_err();
        assert!(matches!(err, ClientError::Encoding(_)));
    }

    #[test]
    fn test_serialization_error_surfaces() {
        let client = Client::new("https://blog.example.com", "").unwrap();
        let err = client
            .build_request(Method::POST, "/", Some(&Unserializable))
            .unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[test]
    fn test_invalid_base_url_is_transport_error() {
        let client = Client::new("not a url", "").unwrap();
        let err = client.build_request::<()>(Method::GET, "/", None).unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[test]
    fn test_generate_token_without_key() {
        let client = Client::new("https://blog.example.com", "").unwrap();
        assert!(matches!(
            client.generate_token().unwrap_err(),
            ClientError::MalformedCredential
        ));
    }

    #[test]
    fn test_client_endpoints_delegate_to_config() {
        let client = Client::new("https://blog.example.com", "").unwrap();
        assert_eq!(
            client.endpoint_for_id("admin", "posts", "42"),
            "/ghost/api/v2/admin/posts/42/"
        );
        assert_eq!(
            client.endpoint_for_slug("admin", "posts", "my-post"),
            "/ghost/api/v2/admin/posts/slug/my-post/"
        );
    }
}
