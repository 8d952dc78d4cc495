//! JSON payload envelopes consumed by the site
//!
//! Two resources exist: the publications payload (full set plus featured
//! ids) and the grants payload. Both tolerate missing or wrong-typed
//! top-level fields by defaulting to empty.

use crate::de;
use crate::{GrantAward, Publication};
use serde::{Deserialize, Serialize};

/// The publications resource: the full publication set plus the ids of
/// publications highlighted in the featured panel.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PublicationsPayload {
    /// Featured publication ids. Order is irrelevant: the featured panel
    /// renders in publication-set order.
    #[serde(default, deserialize_with = "de::id_list")]
    pub featured_ids: Vec<String>,
    #[serde(default, deserialize_with = "de::lenient_seq")]
    pub publications: Vec<Publication>,
}

/// The grants resource.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GrantsPayload {
    #[serde(default, deserialize_with = "de::lenient_seq")]
    pub grants_awards: Vec<GrantAward>,
}
