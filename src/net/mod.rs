//! HTTP client layer: shared request path, endpoint wrappers, wire types.

pub mod api;
pub mod http;
pub mod types;
