use ghost_admin::api::token::{generate_token, split_key, Claims};
use ghost_admin::{ClientConfig, ClientError, Post};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_well_formed_key_signs(
        id in "[a-f0-9]{24}",
        secret in proptest::collection::vec(any::<u8>(), 1..64),
        version in "v[1-9]",
    ) {
        let key = format!("{}:{}", id, hex::encode(&secret));
        let token = generate_token(&key, &version).unwrap();

        let header = decode_header(&token).unwrap();
        prop_assert_eq!(header.kid.as_deref(), Some(id.as_str()));

        let audience = format!("/{version}/admin/");
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience.as_str()]);
        let claims = decode::<Claims>(&token, &DecodingKey::from_secret(&secret), &validation)
            .unwrap()
            .claims;
        prop_assert_eq!(claims.aud, audience);
        prop_assert_eq!(claims.exp - claims.iat, 300);
    }

    #[test]
    fn test_separator_count_must_be_one(parts in proptest::collection::vec("[a-f0-9]{2,8}", 1..6)) {
        prop_assume!(parts.len() != 2);
        let key = parts.join(":");
        prop_assert!(matches!(split_key(&key), Err(ClientError::MalformedCredential)));
    }

    #[test]
    fn test_non_hex_secret_rejected(id in "[a-z0-9]{1,24}", secret in "[g-z]{1,32}") {
        let key = format!("{id}:{secret}");
        prop_assert!(matches!(generate_token(&key, "v2"), Err(ClientError::Encoding(_))));
    }

    #[test]
    fn test_endpoint_shape(
        api in "[a-z]{1,10}",
        resource in "[a-z]{1,10}",
        id in "[a-z0-9-]{1,24}",
    ) {
        let config = ClientConfig::new("https://blog.example.com", "");

        let by_id = config.endpoint_for_id(&api, &resource, &id);
        prop_assert_eq!(by_id, format!("/ghost/api/v2/{api}/{resource}/{id}/"));

        let by_slug = config.endpoint_for_slug(&api, &resource, &id);
        prop_assert!(by_slug.starts_with("/ghost/api/v2/"));
        let expected_suffix = format!("/slug/{}/", id);
        prop_assert!(by_slug.ends_with(&expected_suffix));
    }

    #[test]
    fn test_present_fields_survive_decode(title in ".*", excerpt in proptest::option::of(".*")) {
        let post = Post {
            title: Some(title),
            custom_excerpt: excerpt,
            ..Default::default()
        };
        let encoded = serde_json::to_string(&post).unwrap();
        let decoded: Post = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, post);
    }
}
