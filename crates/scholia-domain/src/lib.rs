//! Domain types for the scholia personal-site suite
//!
//! This crate provides the data model shared by the rendering and loading
//! crates:
//! - Publication: one bibliographic record (title, citation, year, topics)
//! - GrantAward: one grant or award line for the CV view
//! - PublicationsPayload / GrantsPayload: the JSON envelopes the site consumes
//!
//! Deserialization is deliberately lenient: a record with a missing or
//! wrong-typed field is defaulted, never rejected, so a half-broken dataset
//! still renders.

mod de;
pub mod grant;
pub mod payload;
pub mod publication;

pub use grant::*;
pub use payload::*;
pub use publication::*;
