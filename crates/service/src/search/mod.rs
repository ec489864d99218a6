//! Search groups and their terms: domain types, the repository seam with its
//! durable and in-memory backends, and the service used by HTTP handlers.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use repository::SearchRepository;
pub use service::SearchService;
