//! Display surface abstraction
//!
//! The host page mounts a subset of well-known slots; the pipeline commits
//! finished HTML fragments into them. Committing to a slot the host did
//! not mount is a silent no-op, so a page without (say) a grants list
//! simply never shows one.

use std::collections::HashMap;

/// Well-known attachment points on the host page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The filterable publication list.
    PublicationList,
    /// The featured-publications panel.
    FeaturedList,
    /// The "Showing X of Y publications" label.
    CountLabel,
    /// The flattened citation list on the CV tab.
    CvPublications,
    /// The grants/awards list on the CV tab.
    CvGrants,
}

/// Sink for rendered fragments. Implementations replace the slot's entire
/// content on each commit (full replace, not incremental patching).
pub trait Surface {
    fn commit(&mut self, slot: Slot, html: &str);
}

/// In-memory surface holding the slots the host mounted.
///
/// Doubles as the test double for the whole pipeline: mount slots, run the
/// controller, read the committed fragments back.
#[derive(Clone, Debug, Default)]
pub struct PageSurface {
    slots: HashMap<Slot, String>,
}

impl PageSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to mount a slot (initially empty).
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.insert(slot, String::new());
        self
    }

    /// Content of a mounted slot, or None when the slot was never mounted.
    pub fn content(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    pub fn is_mounted(&self, slot: Slot) -> bool {
        self.slots.contains_key(&slot)
    }
}

impl Surface for PageSurface {
    fn commit(&mut self, slot: Slot, html: &str) {
        if let Some(content) = self.slots.get_mut(&slot) {
            *content = html.to_string();
        }
    }
}
