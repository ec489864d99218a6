//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and a bounded retry policy for storage calls.

pub mod errors;
pub mod retry;
pub mod search;
#[cfg(test)]
pub mod test_support;
