//! HTTP delivery method flags.
//!
//! A message can reach an endpoint by one or more transport mechanisms.
//! `GET_REQUEST` and `POST_REQUEST` name HTTP verbs; other flags (the
//! `Authorization` header flag) refine how parameters are carried and
//! are only meaningful alongside a verb.
//!
//! ## Text form
//! Flag sets render as their names in ascending bit order joined by
//! `", "` (`"PostRequest, GetRequest"`), and the empty set as `"None"`.
//! Bits with no name are written as one hex token (`"PostRequest, 0x40"`).
//! Parsing accepts the same names in any case, plus `0x..` tokens,
//! separated by `,` or `|`.

use std::str::FromStr;

use bitflags::bitflags;

use crate::constants::{
    DELIVERY_AUTHORIZATION_HEADER, DELIVERY_GET, DELIVERY_NONE, DELIVERY_POST, HTTP_VERB_MASK,
};

bitflags! {
    /// Set of HTTP delivery methods allowed for a message.
    ///
    /// # Flags
    ///
    /// - `AUTHORIZATION_HEADER_REQUEST`: parameters in the `Authorization` header
    /// - `POST_REQUEST`: HTTP POST, form-encoded body
    /// - `GET_REQUEST`: HTTP GET, query string
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HttpDeliveryMethod: u8 {
        /// Parameters travel in the HTTP `Authorization` header.
        const AUTHORIZATION_HEADER_REQUEST = DELIVERY_AUTHORIZATION_HEADER;

        /// HTTP POST with form-encoded body.
        const POST_REQUEST = DELIVERY_POST;

        /// HTTP GET with query string.
        const GET_REQUEST = DELIVERY_GET;
    }
}

/// Display names, in ascending bit order.
const FLAG_NAMES: [(HttpDeliveryMethod, &str); 3] = [
    (
        HttpDeliveryMethod::AUTHORIZATION_HEADER_REQUEST,
        "AuthorizationHeaderRequest",
    ),
    (HttpDeliveryMethod::POST_REQUEST, "PostRequest"),
    (HttpDeliveryMethod::GET_REQUEST, "GetRequest"),
];

const NONE_NAME: &str = "None";

impl HttpDeliveryMethod {
    /// The empty set. Never a valid endpoint method.
    pub const NONE: Self = Self::from_bits_retain(DELIVERY_NONE);

    /// Both HTTP verb flags.
    pub const HTTP_VERBS: Self = Self::from_bits_retain(HTTP_VERB_MASK);

    /// Returns `true` if at least one HTTP verb flag (GET or POST) is set.
    pub const fn has_http_verb(self) -> bool {
        self.intersects(Self::HTTP_VERBS)
    }
}

impl Default for HttpDeliveryMethod {
    fn default() -> Self {
        Self::NONE
    }
}

impl std::fmt::Display for HttpDeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str(NONE_NAME);
        }
        let mut first = true;
        for (flag, name) in FLAG_NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        // Bits retained from `from_bits_retain` with no name.
        let unknown = self.bits() & !Self::all().bits();
        if unknown != 0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{unknown:#x}")?;
        }
        Ok(())
    }
}

/// Error returned when a delivery method string names an unknown flag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown delivery method: {0:?}")]
pub struct ParseMethodError(pub String);

impl FromStr for HttpDeliveryMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(NONE_NAME) {
            return Ok(Self::NONE);
        }

        let mut methods = Self::NONE;
        for part in trimmed.split([',', '|']) {
            let part = part.trim();
            let flag = match parse_unnamed_bits(part) {
                Some(flag) => flag,
                None => FLAG_NAMES
                    .iter()
                    .find(|(_, name)| name.eq_ignore_ascii_case(part))
                    .map(|(flag, _)| *flag)
                    .ok_or_else(|| ParseMethodError(part.to_string()))?,
            };
            methods |= flag;
        }
        Ok(methods)
    }
}

/// Parses the `0x..` token `Display` writes for bits with no name.
fn parse_unnamed_bits(part: &str) -> Option<HttpDeliveryMethod> {
    let hex = part
        .strip_prefix("0x")
        .or_else(|| part.strip_prefix("0X"))?;
    u8::from_str_radix(hex, 16)
        .ok()
        .map(HttpDeliveryMethod::from_bits_retain)
}

// Serialized through the text form so configuration files stay readable.
#[cfg(feature = "config")]
impl serde::Serialize for HttpDeliveryMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "config")]
impl<'de> serde::Deserialize<'de> for HttpDeliveryMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
