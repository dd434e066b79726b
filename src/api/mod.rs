//! Backend access: category catalog retrieval and listing submission.

mod catalog;
mod client;
mod error;
mod listing;
mod scope;

pub use catalog::{map_categories, ApiCategory, CatalogApi};
pub use client::ApiClient;
pub use error::ApiError;
pub use listing::{ListingApi, ListingSubmission, SubmissionReceipt};
pub use scope::{CancelHandle, RequestScope};
