//! Message receiving endpoint — an immutable (location, methods) pair.
//!
//! Describes where a message may be sent (an absolute URL) and how
//! (the allowed HTTP delivery methods). Used for authorization, token
//! and callback endpoints alike.
//!
//! ## Invariants
//! - The location is always present and absolute.
//! - The allowed methods are never empty.
//! - The allowed methods include `GET_REQUEST` or `POST_REQUEST`.
//!
//! Every constructor funnels through [`MessageReceivingEndpoint::from_parts`],
//! which checks these in order. Fields are private and there are no
//! setters, so an instance stays valid for its whole lifetime.
//!
//! ## Non-goals
//! - No network I/O or URL resolution.
//! - No serialization of the descriptor itself.

use url::Url;

use crate::delivery::HttpDeliveryMethod;
use crate::errors::{EndpointError, MethodRejection};

/// An immutable description of a URL that receives messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageReceivingEndpoint {
    location: Url,
    allowed_methods: HttpDeliveryMethod,
}

impl MessageReceivingEndpoint {
    /// Build an endpoint from URL text.
    ///
    /// # Errors
    /// Returns `EndpointError::MalformedUrl` if `location` is not a valid
    /// absolute URL, otherwise any error from [`Self::from_parts`].
    pub fn parse(location: &str, method: HttpDeliveryMethod) -> Result<Self, EndpointError> {
        let url = Url::parse(location).map_err(|e| {
            let err = EndpointError::MalformedUrl(e);
            tracing::debug!(location, code = err.code(), "endpoint rejected: {err}");
            err
        })?;
        Self::from_parts(Some(url), method)
    }

    /// Build an endpoint from an already parsed URL.
    ///
    /// # Errors
    /// Returns `EndpointError::InvalidMethod` if `method` is empty or
    /// names no HTTP verb.
    pub fn new(location: Url, method: HttpDeliveryMethod) -> Result<Self, EndpointError> {
        Self::from_parts(Some(location), method)
    }

    /// Canonical constructor. Checks, in order:
    ///
    /// 1. `location` is present, else `NullLocation`.
    /// 2. `method` is not empty, else `InvalidMethod(Empty)`.
    /// 3. `method` includes GET or POST, else `InvalidMethod(MissingHttpVerb)`.
    ///
    /// # Errors
    /// Returns the first violated precondition. No instance exists on error.
    pub fn from_parts(
        location: Option<Url>,
        method: HttpDeliveryMethod,
    ) -> Result<Self, EndpointError> {
        match validate(location, method) {
            Ok(location) => {
                tracing::debug!(
                    location = %location,
                    methods = %method,
                    "message receiving endpoint constructed"
                );
                Ok(Self {
                    location,
                    allowed_methods: method,
                })
            }
            Err(err) => {
                tracing::debug!(methods = %method, code = err.code(), "endpoint rejected: {err}");
                Err(err)
            }
        }
    }

    /// The URL of this endpoint.
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// The HTTP method(s) allowed. Never empty.
    pub fn allowed_methods(&self) -> HttpDeliveryMethod {
        self.allowed_methods
    }

    /// Returns `true` if every flag in `method` is allowed.
    ///
    /// An empty `method` is never allowed.
    pub fn allows(&self, method: HttpDeliveryMethod) -> bool {
        !method.is_empty() && self.allowed_methods.contains(method)
    }

    /// Consume the endpoint, returning its location and allowed methods.
    pub fn into_parts(self) -> (Url, HttpDeliveryMethod) {
        (self.location, self.allowed_methods)
    }
}

fn validate(location: Option<Url>, method: HttpDeliveryMethod) -> Result<Url, EndpointError> {
    let location = location.ok_or(EndpointError::NullLocation)?;
    if method.is_empty() {
        return Err(EndpointError::InvalidMethod(MethodRejection::Empty));
    }
    if !method.has_http_verb() {
        return Err(EndpointError::InvalidMethod(
            MethodRejection::MissingHttpVerb,
        ));
    }
    Ok(location)
}

impl std::fmt::Display for MessageReceivingEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.allowed_methods, self.location)
    }
}

impl TryFrom<(Url, HttpDeliveryMethod)> for MessageReceivingEndpoint {
    type Error = EndpointError;

    fn try_from((location, method): (Url, HttpDeliveryMethod)) -> Result<Self, Self::Error> {
        Self::new(location, method)
    }
}

impl TryFrom<(&str, HttpDeliveryMethod)> for MessageReceivingEndpoint {
    type Error = EndpointError;

    fn try_from((location, method): (&str, HttpDeliveryMethod)) -> Result<Self, Self::Error> {
        Self::parse(location, method)
    }
}
