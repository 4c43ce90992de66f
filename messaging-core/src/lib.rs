//! Messaging Core — endpoint descriptors for the OAuth messaging layer.
//!
//! A [`MessageReceivingEndpoint`](endpoint::MessageReceivingEndpoint)
//! pairs an absolute URL with the HTTP delivery method(s) a message may
//! use to reach it. Descriptors are validated once at construction and
//! never change afterwards: if you hold one, it is valid.
//!
//! # Module Map
//!
//! | Module | Contents | Feature |
//! |--------|----------|---------|
//! | [`constants`] | Delivery method bit values | — |
//! | [`errors`] | `EndpointError` + error code registry | — |
//! | [`delivery`] | `HttpDeliveryMethod` flag set | — |
//! | [`endpoint`] | `MessageReceivingEndpoint` | — |
//! | [`config`] | JSON endpoint configuration | `config` |
//!
//! # Example
//!
//! ```
//! use messaging_core::delivery::HttpDeliveryMethod;
//! use messaging_core::endpoint::MessageReceivingEndpoint;
//!
//! let endpoint = MessageReceivingEndpoint::parse(
//!     "https://example.com/oauth/authorize",
//!     HttpDeliveryMethod::POST_REQUEST,
//! )?;
//! assert_eq!(endpoint.location().as_str(), "https://example.com/oauth/authorize");
//! assert_eq!(endpoint.allowed_methods(), HttpDeliveryMethod::POST_REQUEST);
//! # Ok::<(), messaging_core::errors::EndpointError>(())
//! ```

/// Delivery method bit values.
pub mod constants;

/// Error types for endpoint construction.
pub mod errors;

/// HTTP delivery method flags.
pub mod delivery;

/// Immutable message receiving endpoint descriptor.
pub mod endpoint;

/// Endpoint configuration loading.
/// Requires the `config` feature: `cargo test --features config`.
#[cfg(feature = "config")]
pub mod config;

pub use delivery::HttpDeliveryMethod;
pub use endpoint::MessageReceivingEndpoint;
pub use errors::{EndpointError, MethodRejection};
