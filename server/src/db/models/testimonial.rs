//! Testimonial Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Guest testimonial entity
///
/// Submitted publicly, shown only after an administrator approves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    /// 1..=5
    pub rating: i64,
    pub comment: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub approved: bool,
    /// Epoch millis
    pub created_at: i64,
}

/// Submit testimonial payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialCreate {
    pub name: String,
    pub rating: i64,
    pub comment: String,
}
