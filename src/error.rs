use thiserror::Error;

/// Failures raised while building or sending an Admin API call.
///
/// Errors reported *by* Ghost arrive as [`crate::types::ApiError`] records
/// inside a response envelope and are never turned into a `ClientError`.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("admin key must have the form <id>:<hex-secret>")]
    MalformedCredential,

    #[error("admin key secret is not valid hex: {0}")]
    Encoding(#[from] hex::FromHexError),

    #[error("failed to sign admin token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_credential_message() {
        let err = ClientError::MalformedCredential;
        assert_eq!(
            err.to_string(),
            "admin key must have the form <id>:<hex-secret>"
        );
    }

    #[test]
    fn test_hex_error_converts() {
        let hex_err = hex::decode("zz").unwrap_err();
        let err: ClientError = hex_err.into();
        assert!(matches!(err, ClientError::Encoding(_)));
        assert!(err.to_string().starts_with("admin key secret is not valid hex"));
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Serialization(_)));
    }
}
