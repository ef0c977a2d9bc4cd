//! Repository layer for data access.

pub mod entities;
mod fixture_repository;
mod submission_repository;

pub use fixture_repository::{FixtureRepository, FixtureStore};
pub use submission_repository::{SubmissionRepository, SubmissionStore};

#[cfg(any(test, feature = "test-utils"))]
pub use fixture_repository::MockFixtureRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use submission_repository::MockSubmissionRepository;
