//! Content types served by the preview server.

pub const XML: &str = "application/xml; charset=utf-8";
pub const JSON: &str = "application/json";
pub const PLAIN: &str = "text/plain; charset=utf-8";
