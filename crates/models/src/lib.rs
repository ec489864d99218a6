//! SeaORM entities for search groups and their terms, plus connection helpers.

pub mod errors;
pub mod db;
pub mod ordering;
pub mod search_group;
pub mod search_term;

#[cfg(test)]
mod tests;
