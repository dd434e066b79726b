use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use ventureflow_core::WizardState;
use ventureflow_domain::{ListingData, Package};

use super::{ApiClient, ApiError, RequestScope};

const LISTINGS_PATH: &str = "listings";

/// Payload sent when a listing is published.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingSubmission {
    pub submission_id: Uuid,
    pub category_id: String,
    pub subcategory_id: String,
    pub package: Package,
    pub listing_data: ListingData,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

impl ListingSubmission {
    /// Builds a submission from the wizard state. Category, subcategory and
    /// package must all be selected.
    pub fn from_state(state: &WizardState) -> Result<Self, ApiError> {
        let category_id = state
            .selected_category_id
            .clone()
            .ok_or_else(|| ApiError::Incomplete("no category selected".into()))?;
        let subcategory_id = state
            .selected_subcategory_id
            .clone()
            .ok_or_else(|| ApiError::Incomplete("no subcategory selected".into()))?;
        let package = state
            .selected_package
            .ok_or_else(|| ApiError::Incomplete("no package selected".into()))?;

        Ok(Self {
            submission_id: Uuid::new_v4(),
            category_id,
            subcategory_id,
            package,
            listing_data: state.listing_form_data.clone(),
            submitted_at: Utc::now(),
            owner_id: state.user.as_ref().map(|user| user.id.clone()),
        })
    }
}

/// Backend acknowledgement for a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub listing_id: Option<String>,
}

/// Listing endpoint.
pub struct ListingApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ListingApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Publishes `submission`. A receipt with `success: false` becomes
    /// [`ApiError::Rejected`] carrying the backend message.
    pub async fn submit(&self, submission: &ListingSubmission, scope: &RequestScope) -> Result<SubmissionReceipt, ApiError> {
        let receipt: SubmissionReceipt = self.client.send_post(LISTINGS_PATH, submission, scope).await?;
        if !receipt.success {
            return Err(ApiError::Rejected(if receipt.message.is_empty() {
                "no reason given".into()
            } else {
                receipt.message
            }));
        }
        info!(
            submission = %submission.submission_id,
            listing = receipt.listing_id.as_deref().unwrap_or("-"),
            "listing submitted"
        );
        Ok(receipt)
    }
}
