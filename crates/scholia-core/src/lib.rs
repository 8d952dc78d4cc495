//! scholia-core: filter/sort/render pipeline and page state.
//!
//! Everything in this crate is synchronous and pure-by-construction: the
//! pipeline computes HTML fragments from (publication set, featured set,
//! view state) and a thin [`Surface`] adapter commits them to whatever
//! slots the host page mounted. No DOM, no IO, no ambient state.
//!
//! Module map:
//! - [`escape`] - HTML sanitizer applied to every interpolated field
//! - [`state`] - list view state: active filter, query, sort key
//! - [`filter`] - the query/topic filter predicate
//! - [`sort`] - stable comparator-based sorting
//! - [`card`] - one publication record to one card fragment
//! - [`pipeline`] - filter → sort → cards → count label
//! - [`surface`] - named slots and the commit trait
//! - [`controller`] - owns state and data, reacts to input events
//! - [`chrome`] - tab strip, nav menu, sticky header, footer year

pub mod card;
pub mod chrome;
pub mod controller;
pub mod escape;
pub mod filter;
pub mod pipeline;
pub mod sort;
pub mod state;
pub mod surface;

pub use card::*;
pub use chrome::*;
pub use controller::*;
pub use escape::*;
pub use filter::*;
pub use pipeline::*;
pub use sort::*;
pub use state::*;
pub use surface::*;
