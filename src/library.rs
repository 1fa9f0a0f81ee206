//! Track catalog: one-level directory listings filtered to subdirectories
//! and playable files, with cursor navigation.

mod catalog;
mod model;
mod scan;

pub use catalog::Catalog;
pub use model::EnterOutcome;

#[cfg(test)]
mod tests;
