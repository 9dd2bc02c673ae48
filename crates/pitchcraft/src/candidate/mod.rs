pub mod error;
pub mod in_memory_repository;
pub mod model;
pub mod repository;
pub mod seeds;
pub mod service;
pub mod sqlite_repository;

pub use error::{CandidateError, Result};
pub use in_memory_repository::InMemoryCandidateRepository;
pub use model::{CandidateId, CandidateRecord};
pub use repository::CandidateRepository;
pub use seeds::DEFAULT_SEEDS;
pub use service::{BuildSummary, CandidateService, FetchedCandidate, load_seed_words};
pub use sqlite_repository::SqliteCandidateRepository;
