pub mod document;
pub mod prune;
