//! SeaORM entities.

pub mod logistics_item;
pub mod logistics_request;
pub mod onboarding_step;
pub mod psychometric_question;
pub mod psychometric_test;
pub mod submission;
