//! Conformance: service provider configuration loading.
//!
//! A document either yields three valid endpoints or fails naming the
//! first offending endpoint.

use messaging_core::config::{load_endpoint, load_service_provider, ConfigError};
use messaging_core::delivery::HttpDeliveryMethod;
use messaging_core::errors::{EndpointError, MethodRejection};

const PROVIDER: &str = r#"{
    "request_token": {
        "location": "https://sp.example/oauth/request_token",
        "methods": "AuthorizationHeaderRequest, PostRequest"
    },
    "user_authorization": {
        "location": "https://sp.example/oauth/authorize",
        "methods": "GetRequest | PostRequest"
    },
    "access_token": {
        "location": "https://sp.example/oauth/access_token",
        "methods": "PostRequest"
    }
}"#;

#[test]
fn conformance_provider_loads() {
    let endpoints = load_service_provider(PROVIDER).unwrap();

    assert_eq!(
        endpoints.request_token.location().as_str(),
        "https://sp.example/oauth/request_token"
    );
    assert_eq!(
        endpoints.request_token.allowed_methods(),
        HttpDeliveryMethod::AUTHORIZATION_HEADER_REQUEST | HttpDeliveryMethod::POST_REQUEST
    );
    assert_eq!(
        endpoints.user_authorization.allowed_methods(),
        HttpDeliveryMethod::HTTP_VERBS
    );
    assert_eq!(
        endpoints.access_token.to_string(),
        "PostRequest https://sp.example/oauth/access_token"
    );
}

#[test]
fn conformance_failing_endpoint_is_named() {
    let doc = PROVIDER.replace(r#""methods": "GetRequest | PostRequest""#, r#""methods": "None""#);
    let err = load_service_provider(&doc).unwrap_err();
    match err {
        ConfigError::Endpoint { name, source } => {
            assert_eq!(name, "user_authorization");
            assert_eq!(source, EndpointError::InvalidMethod(MethodRejection::Empty));
        }
        other => panic!("expected endpoint error, got {other:?}"),
    }
}

#[test]
fn conformance_first_failure_wins() {
    let doc = PROVIDER
        .replace("https://sp.example/oauth/request_token", "not a url")
        .replace(r#""methods": "PostRequest""#, r#""methods": "AuthorizationHeaderRequest""#);
    let err = load_service_provider(&doc).unwrap_err();
    assert!(
        matches!(
            err,
            ConfigError::Endpoint {
                name: "request_token",
                source: EndpointError::MalformedUrl(_),
            }
        ),
        "{err:?}"
    );
}

#[test]
fn conformance_null_location_in_document() {
    let err = load_endpoint(r#"{ "location": null, "methods": "GetRequest" }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Endpoint {
            name: "entry",
            source: EndpointError::NullLocation,
        }
    ));
    assert_eq!(
        err.to_string(),
        "Config error: endpoint entry: Null location: endpoint location is required"
    );
}

#[test]
fn conformance_missing_section_is_json_error() {
    let err = load_service_provider(r#"{ "request_token": { "location": "https://a.example" } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}
