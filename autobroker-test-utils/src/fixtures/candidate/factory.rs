//! Factory functions for generating in-memory candidate models.

use chrono::Utc;
use entity::candidate::CandidateStatus;

use crate::model::CandidateModel;

/// Create a mock candidate model without touching the database.
///
/// # Arguments
/// - `status` - Lifecycle status of the candidate
/// - `listing_id` - Optional listing reference
pub fn mock_candidate_model(status: CandidateStatus, listing_id: Option<i32>) -> CandidateModel {
    CandidateModel {
        id: 1,
        subscription_id: 1,
        source_url: "https://www.encar.com/dc/dc_cardetailview.do?carid=1".to_string(),
        listing_id,
        status,
        created_at: Utc::now().naive_utc(),
    }
}
