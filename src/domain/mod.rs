//! Domain layer - Proverb records, querying and selection

pub mod proverb;
pub mod query;
pub mod seed;
pub mod selection;

pub use proverb::{parse_tag_list, Entry, Proverb, ProverbId};
pub use query::{compute_view, Filters, ALL_REGIONS, ALL_TAGS};
pub use seed::seed_proverbs;
pub use selection::{Detail, Selection};
