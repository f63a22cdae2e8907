//! Application layer - Canonical list ownership and browse orchestration

pub mod browse;
pub mod repository;

pub use browse::BrowseSession;
pub use repository::{Origin, ProverbRepository};
