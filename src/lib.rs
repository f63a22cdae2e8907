//! kahawat - Proverb collection manager
//!
//! Keeps a small curated collection of proverbs in a JSON file and offers
//! free-text search plus tag and region filtering over it. The `kahawat`
//! binary is a command-line front end over this library.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::KahawatError;
