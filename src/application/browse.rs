//! Browse session: filters, filtered view and selection kept in sync

use crate::application::ProverbRepository;
use crate::domain::{
    Detail, Entry, Filters, Proverb, ProverbId, Selection, ALL_REGIONS, ALL_TAGS,
};
use crate::error::{KahawatError, Result};
use crate::infrastructure::ProverbStore;
use tracing::debug;

/// State a presentation layer keeps while browsing the collection.
///
/// The view is stored as ids so the session does not borrow the repository.
/// Any recomputation of the view clears the selection.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    filters: Filters,
    view: Vec<ProverbId>,
    selection: Selection,
    tag_choices: Vec<String>,
    region_choices: Vec<String>,
}

impl BrowseSession {
    /// Start with no filters applied
    pub fn new<S: ProverbStore>(repo: &ProverbRepository<S>) -> Self {
        Self::with_filters(repo, Filters::default())
    }

    pub fn with_filters<S: ProverbStore>(repo: &ProverbRepository<S>, filters: Filters) -> Self {
        let mut session = BrowseSession {
            filters,
            view: Vec::new(),
            selection: Selection::default(),
            tag_choices: Vec::new(),
            region_choices: Vec::new(),
        };
        session.rebuild_choices(repo);
        session.recompute(repo);
        session
    }

    fn rebuild_choices<S: ProverbStore>(&mut self, repo: &ProverbRepository<S>) {
        self.tag_choices = std::iter::once(ALL_TAGS.to_string())
            .chain(repo.all_tags())
            .collect();
        self.region_choices = std::iter::once(ALL_REGIONS.to_string())
            .chain(repo.all_regions())
            .collect();
    }

    fn recompute<S: ProverbStore>(&mut self, repo: &ProverbRepository<S>) {
        self.view = self
            .filters
            .view(repo.entries())
            .into_iter()
            .map(|e| e.id)
            .collect();
        self.selection.clear();
        debug!(filters = ?self.filters, visible = self.view.len(), "recomputed view");
    }

    /// Rebuild choice lists after a mutation and recompute the view.
    ///
    /// A tag or region choice that no longer exists falls back to its sentinel.
    pub fn refresh<S: ProverbStore>(&mut self, repo: &ProverbRepository<S>) {
        self.rebuild_choices(repo);
        if !self.tag_choices.contains(&self.filters.tag) {
            self.filters.tag = ALL_TAGS.to_string();
        }
        if !self.region_choices.contains(&self.filters.region) {
            self.filters.region = ALL_REGIONS.to_string();
        }
        self.recompute(repo);
    }

    pub fn set_search<S: ProverbStore>(&mut self, repo: &ProverbRepository<S>, search: &str) {
        self.filters.search = search.to_string();
        self.recompute(repo);
    }

    pub fn set_tag<S: ProverbStore>(&mut self, repo: &ProverbRepository<S>, tag: &str) {
        self.filters.tag = tag.to_string();
        self.recompute(repo);
    }

    pub fn set_region<S: ProverbStore>(&mut self, repo: &ProverbRepository<S>, region: &str) {
        self.filters.region = region.to_string();
        self.recompute(repo);
    }

    /// The filtered view resolved against the repository
    pub fn view<'a, S: ProverbStore>(&self, repo: &'a ProverbRepository<S>) -> Vec<&'a Entry> {
        self.view.iter().filter_map(|id| repo.get(*id)).collect()
    }

    /// Select a row of the view; out of range clears the detail
    pub fn select<S: ProverbStore>(&mut self, repo: &ProverbRepository<S>, index: i64) -> Detail {
        let view = self.view(repo);
        self.selection.select(&view, index)
    }

    pub fn selected_entry<'a, S: ProverbStore>(
        &self,
        repo: &'a ProverbRepository<S>,
    ) -> Option<&'a Entry> {
        self.selection.id().and_then(|id| repo.get(id))
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// `["All Tags", ..all tags]`
    pub fn tag_choices(&self) -> &[String] {
        &self.tag_choices
    }

    /// `["All Regions", ..all regions]`
    pub fn region_choices(&self) -> &[String] {
        &self.region_choices
    }

    fn require_selection(&self, action: &str) -> Result<ProverbId> {
        self.selection
            .id()
            .ok_or_else(|| KahawatError::NoSelection(action.to_string()))
    }

    /// Add a proverb and refresh. A failed save still refreshes.
    pub fn add<S: ProverbStore>(
        &mut self,
        repo: &mut ProverbRepository<S>,
        proverb: Proverb,
    ) -> Result<ProverbId> {
        let result = repo.add(proverb);
        self.refresh(repo);
        result
    }

    /// Replace the selected proverb and refresh
    pub fn edit_selected<S: ProverbStore>(
        &mut self,
        repo: &mut ProverbRepository<S>,
        proverb: Proverb,
    ) -> Result<()> {
        let id = self.require_selection("edit")?;
        let result = repo.update(id, proverb);
        self.refresh(repo);
        result.map(|_| ())
    }

    /// Delete the selected proverb and refresh
    pub fn delete_selected<S: ProverbStore>(
        &mut self,
        repo: &mut ProverbRepository<S>,
    ) -> Result<()> {
        let id = self.require_selection("delete")?;
        let result = repo.delete(id);
        self.refresh(repo);
        result.map(|_| ())
    }
}
