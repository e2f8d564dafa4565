//! Test utilities shared across the newsrack workspace: content fixtures and
//! a scripted page fetcher with call accounting.

pub mod fetcher;
pub mod fixtures;

pub use fetcher::ScriptedFetcher;
pub use fixtures::{dated_item, item, page};
