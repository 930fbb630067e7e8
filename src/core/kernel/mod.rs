/// Kernel - transport layer for the exchange client
///
/// This module contains only transport logic and generic interfaces: the
/// REST dispatcher, request signing, and parameter encoding. Everything
/// exchange-specific (command names, field shapes, response types) lives
/// under `exchanges`.
///
/// # Architecture
///
/// - `RestClient`: unified HTTP interface (public GET / signed POST)
/// - `Signer` / `HmacSha512Signer`: pluggable request authentication
/// - `NonceSource`: strictly increasing per-credential nonce
/// - `ParamSet`: ordered, empty-filtered, form-encoded parameters
pub mod params;
pub mod rest;
pub mod signer;

// Re-export key types for convenience
pub use params::ParamSet;
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{HmacSha512Signer, NonceSource, Signer};
