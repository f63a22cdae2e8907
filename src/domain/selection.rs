//! Selected row and detail panel state

use crate::domain::{Entry, ProverbId};

/// Fields shown in the detail panel for the selected proverb.
///
/// The cleared detail has every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detail {
    pub text: String,
    pub transliteration: String,
    pub meaning: String,
    pub english_equivalent: String,
    pub tags: String,
    pub region: String,
    pub usage_context: String,
}

impl Detail {
    pub fn from_entry(entry: &Entry) -> Self {
        let p = &entry.proverb;
        Detail {
            text: p.text.clone(),
            transliteration: p.transliteration.clone(),
            meaning: p.meaning.clone(),
            english_equivalent: p.english_equivalent.clone(),
            tags: p.display_tags(),
            region: p.region.clone(),
            usage_context: p.usage_context.clone(),
        }
    }

    pub fn is_cleared(&self) -> bool {
        *self == Detail::default()
    }
}

/// Selection into the current filtered view.
///
/// Remembers the id of the selected entry so that a recomputed view can
/// either drop the selection or re-resolve it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
    id: Option<ProverbId>,
}

impl Selection {
    /// Select `index` in `view`. Out-of-range indices, including -1, clear it.
    pub fn select(&mut self, view: &[&Entry], index: i64) -> Detail {
        match usize::try_from(index).ok().and_then(|i| view.get(i).map(|e| (i, e))) {
            Some((i, entry)) => {
                self.index = Some(i);
                self.id = Some(entry.id);
                Detail::from_entry(entry)
            }
            None => {
                self.clear();
                Detail::default()
            }
        }
    }

    pub fn clear(&mut self) {
        self.index = None;
        self.id = None;
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn id(&self) -> Option<ProverbId> {
        self.id
    }

    /// Find the previously selected entry in a recomputed view.
    ///
    /// Clears the selection if the entry is no longer visible.
    pub fn reresolve(&mut self, view: &[&Entry]) -> Option<usize> {
        let id = self.id?;
        match view.iter().position(|e| e.id == id) {
            Some(i) => {
                self.index = Some(i);
                Some(i)
            }
            None => {
                self.clear();
                None
            }
        }
    }
}
