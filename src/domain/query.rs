//! Search and filtering over the canonical proverb list
//!
//! Every stage is a stable selection: records keep their canonical order and
//! nothing is invented. Stages compose in a fixed order, text search first,
//! then the tag filter, then the region filter, each one consuming the
//! previous stage's output.
//!
//! # Examples
//!
//! ```
//! use kahawat::domain::query::{compute_view, ALL_REGIONS, ALL_TAGS};
//! use kahawat::domain::Proverb;
//!
//! let mut caution = Proverb::new("Look before you leap");
//! caution.tags = vec!["caution".to_string()];
//! let records = vec![caution, Proverb::new("Haste makes waste")];
//!
//! let view = compute_view(&records, "", "caution", ALL_REGIONS);
//! assert_eq!(view.len(), 1);
//!
//! let everything = compute_view(&records, "", ALL_TAGS, ALL_REGIONS);
//! assert_eq!(everything.len(), 2);
//! ```

use crate::domain::Proverb;

/// Tag filter value meaning "do not filter on tags"
pub const ALL_TAGS: &str = "All Tags";

/// Region filter value meaning "do not filter on region"
pub const ALL_REGIONS: &str = "All Regions";

/// Case-insensitive substring search over text, transliteration, meaning and tags.
///
/// The english equivalent and usage context are not searched.
pub fn search_text<'a, T, I>(records: I, query: &str) -> Vec<&'a T>
where
    T: AsRef<Proverb> + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches_text(record.as_ref(), &needle))
        .collect()
}

fn matches_text(proverb: &Proverb, needle: &str) -> bool {
    let fields = [
        &proverb.text,
        &proverb.transliteration,
        &proverb.meaning,
    ];
    fields
        .into_iter()
        .chain(proverb.tags.iter())
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keep records carrying `tag` exactly. [`ALL_TAGS`] keeps everything.
pub fn filter_by_tag<'a, T, I>(records: I, tag: &str) -> Vec<&'a T>
where
    T: AsRef<Proverb> + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if tag == ALL_TAGS {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|record| record.as_ref().has_tag(tag))
        .collect()
}

/// Keep records whose region equals `region` exactly. [`ALL_REGIONS`] keeps everything.
pub fn filter_by_region<'a, T, I>(records: I, region: &str) -> Vec<&'a T>
where
    T: AsRef<Proverb> + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if region == ALL_REGIONS {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|record| record.as_ref().region == region)
        .collect()
}

/// Compute the filtered view: search, then tag, then region.
///
/// An empty `search` skips the search stage rather than matching everything.
pub fn compute_view<'a, T>(canonical: &'a [T], search: &str, tag: &str, region: &str) -> Vec<&'a T>
where
    T: AsRef<Proverb>,
{
    let searched = if search.is_empty() {
        canonical.iter().collect()
    } else {
        search_text(canonical, search)
    };
    let tagged = filter_by_tag(searched, tag);
    filter_by_region(tagged, region)
}

/// The three filter inputs of the browse view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub search: String,
    pub tag: String,
    pub region: String,
}

impl Default for Filters {
    fn default() -> Self {
        Filters {
            search: String::new(),
            tag: ALL_TAGS.to_string(),
            region: ALL_REGIONS.to_string(),
        }
    }
}

impl Filters {
    /// True when no stage would remove anything
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.tag == ALL_TAGS && self.region == ALL_REGIONS
    }

    pub fn view<'a, T: AsRef<Proverb>>(&self, canonical: &'a [T]) -> Vec<&'a T> {
        compute_view(canonical, &self.search, &self.tag, &self.region)
    }
}
