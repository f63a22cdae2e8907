//! CLI command definitions

use crate::domain::{parse_tag_list, Filters, Proverb, ALL_REGIONS, ALL_TAGS};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kahawat")]
#[command(about = "Browse, search and edit a collection of proverbs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Proverb file (default: data_file from kahawat.toml, or proverbs.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Filters selecting the view that row indices refer to
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Case-insensitive text to search for
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only proverbs carrying this exact tag
    #[arg(short, long, default_value = ALL_TAGS)]
    pub tag: String,

    /// Only proverbs from this exact region
    #[arg(short, long, default_value = ALL_REGIONS)]
    pub region: String,
}

impl ViewArgs {
    pub fn filters(&self) -> Filters {
        Filters {
            search: self.search.clone(),
            tag: self.tag.clone(),
            region: self.region.clone(),
        }
    }
}

/// Field values for the add and edit forms
#[derive(Args, Debug, Clone, Default)]
pub struct ProverbFields {
    /// The proverb in its original script
    #[arg(long)]
    pub proverb: Option<String>,

    #[arg(long)]
    pub transliteration: Option<String>,

    #[arg(long)]
    pub meaning: Option<String>,

    /// English equivalent (if any)
    #[arg(long)]
    pub english: Option<String>,

    /// Tags separated by commas
    #[arg(long)]
    pub tags: Option<String>,

    /// Region of origin
    #[arg(long)]
    pub origin: Option<String>,

    /// When/how the proverb is typically used
    #[arg(long)]
    pub context: Option<String>,
}

impl ProverbFields {
    /// Fill the form over `base`; fields not given keep the base value
    pub fn apply(&self, base: Proverb) -> Proverb {
        let pick = |given: &Option<String>, current: String| given.clone().unwrap_or(current);
        Proverb {
            text: pick(&self.proverb, base.text),
            transliteration: pick(&self.transliteration, base.transliteration),
            meaning: pick(&self.meaning, base.meaning),
            english_equivalent: pick(&self.english, base.english_equivalent),
            tags: match &self.tags {
                Some(input) => parse_tag_list(input),
                None => base.tags,
            },
            region: pick(&self.origin, base.region),
            usage_context: pick(&self.context, base.usage_context),
        }
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.proverb,
            &self.transliteration,
            &self.meaning,
            &self.english,
            &self.tags,
            &self.origin,
            &self.context,
        ]
        .iter()
        .all(|field| field.is_none())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the proverbs in the filtered view
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show the details of one proverb in the filtered view
    Show {
        /// Row number as printed by `list`
        #[arg(allow_negative_numbers = true)]
        index: i64,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Add a new proverb
    Add {
        #[command(flatten)]
        fields: ProverbFields,
    },

    /// Edit a proverb in the filtered view
    Edit {
        /// Row number as printed by `list`
        #[arg(allow_negative_numbers = true)]
        index: i64,

        #[command(flatten)]
        view: ViewArgs,

        #[command(flatten)]
        fields: ProverbFields,
    },

    /// Delete a proverb in the filtered view
    Delete {
        /// Row number as printed by `list`
        #[arg(allow_negative_numbers = true)]
        index: i64,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// List the tag filter choices
    Tags,

    /// List the region filter choices
    Regions,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
