//! Client side of the relay endpoint

use async_trait::async_trait;

use crate::error::Result;
use crate::submission::Submission;
use crate::wire::RelayResponse;

/// Sends a submission to the relay endpoint.
///
/// `Ok` carries whatever the server answered, including a reported failure.
/// `Err` means the request never completed or its body could not be read.
#[async_trait(?Send)]
pub trait QuoteClient {
    async fn send(&self, submission: &Submission) -> Result<RelayResponse>;
}
