//! Conformance Harness — endpoint error surface and configuration.
//!
//! Coverage:
//! - Error code registry and variant-to-code mapping
//! - Error display stability (bootstrap code logs these verbatim)
//! - JSON configuration loading (requires `--features config`)

#[cfg(feature = "config")]
mod config_loading;
