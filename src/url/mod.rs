//! URL handling module
//!
//! Normalization of discovered links into canonical strings, and the SSRF
//! safety check applied before any outbound request.

mod normalize;
mod safety;

pub use normalize::normalize_url;
pub use safety::is_safe_url;
