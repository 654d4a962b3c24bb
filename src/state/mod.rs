/// State management module
///
/// This module handles all application state, including:
/// - The static nominee dataset and its facet derivations (directory.rs)
/// - Shared data structures (data.rs)
/// - Search and multi-select filter criteria (filter.rs)
/// - The detail-view selection state machine (selection.rs)

pub mod directory;
pub mod data;
pub mod filter;
pub mod selection;
