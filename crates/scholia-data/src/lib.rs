//! scholia-data: obtains the publication and grants datasets and feeds
//! them to the rendering core.
//!
//! Each resource comes from one of two places: an inline JSON payload
//! embedded in the host page (preferred, works without a network), or an
//! HTTP GET of a fixed relative path with caching disabled. A resource is
//! loaded once per page lifetime; a failed load is logged as a warning
//! and leaves the page in its pre-load empty state. There is no retry and
//! no user-facing error surface.

pub mod http;
pub mod loader;

pub use http::*;
pub use loader::*;
