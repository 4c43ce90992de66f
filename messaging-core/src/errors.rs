//! Error types for messaging-core.
//!
//! One enum covers every way endpoint construction can fail. Each
//! variant also maps to a stable string code so bootstrap code can log
//! or report failures without matching on display text.

/// Why a delivery method set was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodRejection {
    /// The flag set was empty (`HttpDeliveryMethod::NONE`).
    Empty,
    /// Only auxiliary flags were set; neither GET nor POST was allowed.
    MissingHttpVerb,
}

impl std::fmt::Display for MethodRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("no delivery method specified"),
            Self::MissingHttpVerb => {
                f.write_str("a GetRequest or PostRequest flag is required")
            }
        }
    }
}

/// Unified error type for endpoint construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// No location was supplied.
    #[error("Null location: endpoint location is required")]
    NullLocation,

    /// The delivery method set is empty or lacks an HTTP verb flag.
    #[error("Invalid method: {0}")]
    InvalidMethod(MethodRejection),

    /// The location text could not be parsed as an absolute URL.
    #[error("Malformed URL: {0}")]
    MalformedUrl(#[from] url::ParseError),
}

impl EndpointError {
    /// Stable identifier for this error, drawn from [`ENDPOINT_ERROR_CODES`].
    pub fn code(&self) -> &'static str {
        match self {
            Self::NullLocation => "NULL_LOCATION",
            Self::InvalidMethod(_) => "INVALID_METHOD",
            Self::MalformedUrl(_) => "MALFORMED_URL",
        }
    }
}

/// Canonical endpoint error code registry.
///
/// Order matches the order in which the constructor checks its
/// preconditions, with parse failures (textual constructor only) last.
pub const ENDPOINT_ERROR_CODES: [&str; 3] = ["NULL_LOCATION", "INVALID_METHOD", "MALFORMED_URL"];

/// Returns `true` if the given string is a canonical endpoint error code.
pub fn is_valid_endpoint_error_code(code: &str) -> bool {
    ENDPOINT_ERROR_CODES.contains(&code)
}
