pub mod memory;
pub mod seaorm;

pub use memory::InMemorySearchRepository;
pub use seaorm::SeaOrmSearchRepository;
