//! Endpoint configuration — load validated endpoints from JSON.
//!
//! Raw config structs mirror the document shape. `build()` turns them
//! into [`MessageReceivingEndpoint`]s, so a loaded configuration either
//! yields fully valid descriptors or names the endpoint that failed.
//!
//! ```json
//! {
//!   "request_token":      { "location": "https://sp.example/request", "methods": "PostRequest" },
//!   "user_authorization": { "location": "https://sp.example/authorize", "methods": "GetRequest" },
//!   "access_token":       { "location": "https://sp.example/access", "methods": "AuthorizationHeaderRequest, PostRequest" }
//! }
//! ```

use serde::Deserialize;

use crate::delivery::HttpDeliveryMethod;
use crate::endpoint::MessageReceivingEndpoint;
use crate::errors::EndpointError;

/// Raw endpoint entry as it appears in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    /// Endpoint URL text. Missing or `null` means no location.
    #[serde(default)]
    pub location: Option<String>,
    /// Allowed delivery methods, in flag text form.
    #[serde(default)]
    pub methods: HttpDeliveryMethod,
}

impl EndpointConfig {
    /// Validate this entry into an endpoint.
    ///
    /// # Errors
    /// `NullLocation` when `location` is absent, otherwise any error from
    /// [`MessageReceivingEndpoint::parse`].
    pub fn build(&self) -> Result<MessageReceivingEndpoint, EndpointError> {
        match &self.location {
            Some(location) => MessageReceivingEndpoint::parse(location, self.methods),
            None => MessageReceivingEndpoint::from_parts(None, self.methods),
        }
    }
}

/// Raw OAuth service provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceProviderConfig {
    pub request_token: EndpointConfig,
    pub user_authorization: EndpointConfig,
    pub access_token: EndpointConfig,
}

/// The validated endpoints of an OAuth service provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceProviderEndpoints {
    /// Where consumers obtain an unauthorized request token.
    pub request_token: MessageReceivingEndpoint,
    /// Where the user is sent to authorize the request token.
    pub user_authorization: MessageReceivingEndpoint,
    /// Where consumers exchange the authorized request token.
    pub access_token: MessageReceivingEndpoint,
}

/// Configuration loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Document is not valid JSON or has the wrong shape.
    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error),

    /// A named endpoint failed validation.
    #[error("Config error: endpoint {name}: {source}")]
    Endpoint {
        name: &'static str,
        #[source]
        source: EndpointError,
    },
}

impl ServiceProviderConfig {
    /// Validate all three endpoints.
    ///
    /// # Errors
    /// Returns `ConfigError::Endpoint` for the first entry that fails,
    /// checked in document order.
    pub fn build(&self) -> Result<ServiceProviderEndpoints, ConfigError> {
        Ok(ServiceProviderEndpoints {
            request_token: build_named("request_token", &self.request_token)?,
            user_authorization: build_named("user_authorization", &self.user_authorization)?,
            access_token: build_named("access_token", &self.access_token)?,
        })
    }
}

fn build_named(
    name: &'static str,
    config: &EndpointConfig,
) -> Result<MessageReceivingEndpoint, ConfigError> {
    config.build().map_err(|source| {
        tracing::warn!(endpoint = name, code = source.code(), "invalid endpoint config");
        ConfigError::Endpoint { name, source }
    })
}

/// Parse a single endpoint entry from JSON and validate it.
///
/// # Errors
/// `ConfigError::Json` for malformed documents or unknown method names,
/// `ConfigError::Endpoint` (named `"entry"`) for validation failures.
pub fn load_endpoint(json: &str) -> Result<MessageReceivingEndpoint, ConfigError> {
    let config: EndpointConfig = serde_json::from_str(json)?;
    build_named("entry", &config)
}

/// Parse a service provider document from JSON and validate it.
///
/// # Errors
/// See [`ServiceProviderConfig::build`]; malformed JSON yields
/// `ConfigError::Json`.
pub fn load_service_provider(json: &str) -> Result<ServiceProviderEndpoints, ConfigError> {
    let config: ServiceProviderConfig = serde_json::from_str(json)?;
    let endpoints = config.build()?;
    tracing::debug!(
        request_token = %endpoints.request_token,
        user_authorization = %endpoints.user_authorization,
        access_token = %endpoints.access_token,
        "service provider endpoints loaded"
    );
    Ok(endpoints)
}
