//! Delivery method constants.
//!
//! Bit values are part of the messaging layer's configuration surface
//! (persisted flag sets use them), so they MUST NOT be renumbered.

/// No delivery method. Never valid for an endpoint.
pub const DELIVERY_NONE: u8 = 0x0;

/// Message parameters travel in the HTTP `Authorization` header.
/// Auxiliary: does not name an HTTP verb on its own.
pub const DELIVERY_AUTHORIZATION_HEADER: u8 = 0x1;

/// Message is sent as an HTTP POST with a form-encoded body.
pub const DELIVERY_POST: u8 = 0x2;

/// Message is sent as an HTTP GET with query string parameters.
pub const DELIVERY_GET: u8 = 0x4;

/// Mask of the flags that name a concrete HTTP verb.
/// Every endpoint must allow at least one bit of this mask.
pub const HTTP_VERB_MASK: u8 = DELIVERY_POST | DELIVERY_GET;
