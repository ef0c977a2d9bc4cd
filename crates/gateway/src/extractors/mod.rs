//! Request extractors.

mod validated_json;

pub use validated_json::{JsonBody, ValidatedJson, ValidatedJsonOrDefault};
