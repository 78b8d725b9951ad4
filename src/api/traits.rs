//! Trait abstraction for the portal API client to enable mocking in tests

use super::client::SubmitAck;
use crate::state::{ContactPayload, PageData};
use anyhow::Result;
use async_trait::async_trait;

/// Portal API operations, behind a trait so tests can mock the network
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Fetch the account page data shown in the overview
    async fn fetch_page_data(&mut self) -> Result<PageData>;

    /// Submit the contact form payload
    async fn submit_contact(&mut self, payload: &ContactPayload) -> Result<SubmitAck>;
}
