//! Canonical proverb list and its persistence

use crate::domain::{seed_proverbs, Entry, Proverb, ProverbId};
use crate::error::{KahawatError, Result};
use crate::infrastructure::{JsonFileStore, ProverbStore};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Where the canonical list came from at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Document,
    Seed,
}

/// Owner of the canonical proverb list.
///
/// Every mutation changes the in-memory list first and then saves the whole
/// list. A failed save is returned to the caller, but the in-memory change
/// stays and the repository is marked dirty until a later save succeeds.
#[derive(Debug)]
pub struct ProverbRepository<S: ProverbStore = JsonFileStore> {
    store: S,
    entries: Vec<Entry>,
    next_id: u64,
    origin: Origin,
    dirty: bool,
    load_warning: Option<KahawatError>,
}

impl<S: ProverbStore> ProverbRepository<S> {
    /// Load the canonical list from `store`.
    ///
    /// A missing or unopenable document is replaced by the seed set, which is
    /// saved right away. If that save fails the repository is returned dirty.
    /// A malformed document is an error and is left untouched.
    pub fn load(store: S) -> Result<Self> {
        let mut repo = ProverbRepository {
            store,
            entries: Vec::new(),
            next_id: 1,
            origin: Origin::Document,
            dirty: false,
            load_warning: None,
        };

        match repo.store.read()? {
            Some(proverbs) => {
                debug!(count = proverbs.len(), "loaded proverbs");
                repo.extend(proverbs);
            }
            None => {
                info!(
                    path = %repo.store.location().display(),
                    "no proverb file, writing sample set"
                );
                repo.origin = Origin::Seed;
                repo.extend(seed_proverbs());
                if let Err(e) = repo.save() {
                    repo.load_warning = Some(e);
                }
            }
        }

        Ok(repo)
    }

    fn extend(&mut self, proverbs: Vec<Proverb>) {
        for proverb in proverbs {
            let id = self.allocate_id();
            self.entries.push(Entry::new(id, proverb));
        }
    }

    fn allocate_id(&mut self) -> ProverbId {
        let id = ProverbId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Write the full canonical list, replacing the stored document
    pub fn save(&mut self) -> Result<()> {
        let proverbs: Vec<Proverb> = self.entries.iter().map(|e| e.proverb.clone()).collect();
        match self.store.write(&proverbs) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "failed to save proverbs");
                self.dirty = true;
                Err(e)
            }
        }
    }

    /// Append a proverb and save. The proverb is kept even if the save fails.
    pub fn add(&mut self, proverb: Proverb) -> Result<ProverbId> {
        let id = self.allocate_id();
        info!(%id, text = %proverb.text, "adding proverb");
        self.entries.push(Entry::new(id, proverb));
        self.save()?;
        Ok(id)
    }

    /// Replace the proverb with `id` in place, then save.
    ///
    /// Returns `Ok(false)` when no entry has that id.
    pub fn update(&mut self, id: ProverbId, proverb: Proverb) -> Result<bool> {
        let position = self.entries.iter().position(|e| e.id == id);
        self.replace_at(position, proverb)
    }

    /// Replace the first proverb whose text equals `match_text`, then save.
    ///
    /// No match is a silent no-op apart from the save.
    pub fn update_by_text(&mut self, match_text: &str, proverb: Proverb) -> Result<bool> {
        let position = self.position_of_text(match_text);
        self.replace_at(position, proverb)
    }

    fn replace_at(&mut self, position: Option<usize>, proverb: Proverb) -> Result<bool> {
        let found = match position {
            Some(i) => {
                info!(id = %self.entries[i].id, text = %proverb.text, "updating proverb");
                self.entries[i].proverb = proverb;
                true
            }
            None => {
                debug!("update target not found");
                false
            }
        };
        self.save()?;
        Ok(found)
    }

    /// Remove the proverb with `id`, then save.
    pub fn delete(&mut self, id: ProverbId) -> Result<bool> {
        let position = self.entries.iter().position(|e| e.id == id);
        self.remove_at(position)
    }

    /// Remove the first proverb whose text equals `match_text`, then save.
    pub fn delete_by_text(&mut self, match_text: &str) -> Result<bool> {
        let position = self.position_of_text(match_text);
        self.remove_at(position)
    }

    fn remove_at(&mut self, position: Option<usize>) -> Result<bool> {
        let found = match position {
            Some(i) => {
                let removed = self.entries.remove(i);
                info!(id = %removed.id, text = %removed.proverb.text, "deleted proverb");
                true
            }
            None => {
                debug!("delete target not found");
                false
            }
        };
        self.save()?;
        Ok(found)
    }

    /// Sorted, de-duplicated tags across all proverbs
    pub fn all_tags(&self) -> Vec<String> {
        let tags: BTreeSet<&str> = self
            .entries
            .iter()
            .flat_map(|e| e.proverb.tags.iter().map(String::as_str))
            .collect();
        tags.into_iter().map(str::to_string).collect()
    }

    /// Sorted, de-duplicated non-empty regions across all proverbs
    pub fn all_regions(&self) -> Vec<String> {
        let regions: BTreeSet<&str> = self
            .entries
            .iter()
            .map(|e| e.proverb.region.as_str())
            .filter(|r| !r.is_empty())
            .collect();
        regions.into_iter().map(str::to_string).collect()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: ProverbId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Index of the first proverb whose text equals `text`
    pub fn position_of_text(&self, text: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.proverb.text == text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Take the save failure from the seed bootstrap, if any
    pub fn take_load_warning(&mut self) -> Option<KahawatError> {
        self.load_warning.take()
    }

    /// True when memory holds changes the last save failed to write
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
