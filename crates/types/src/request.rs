//! Seeding run request shape and validation.

use serde::{Deserialize, Serialize};

/// Smallest allowed account batch.
pub const MIN_ACCOUNT_COUNT: u32 = 1;
/// Largest allowed account batch.
pub const MAX_ACCOUNT_COUNT: u32 = 1000;
/// Smallest allowed tweets-per-account value.
pub const MIN_TWEETS_PER_ACCOUNT: u32 = 1;
/// Largest allowed tweets-per-account value.
pub const MAX_TWEETS_PER_ACCOUNT: u32 = 100;

/// Immutable input for one seeding run.
///
/// Callers are expected to [`validate`](SeedRequest::validate) the shape
/// before starting a run; the workflow itself treats an in-range request as
/// a precondition. The deletion quota is range-free here: whether it fits
/// the batch can only be judged after tweet creation, and that check is a
/// recorded business-rule outcome rather than an up-front rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRequest {
    /// Number of accounts to create.
    pub account_count: u32,
    /// Number of tweets to create per successfully created account.
    pub tweets_per_account: u32,
    /// Number of accounts to delete one tweet from after population.
    pub deletion_quota: u32,
}

impl SeedRequest {
    /// Create a new request.
    pub fn new(account_count: u32, tweets_per_account: u32, deletion_quota: u32) -> Self {
        Self {
            account_count,
            tweets_per_account,
            deletion_quota,
        }
    }

    /// Check the request shape against the allowed ranges.
    pub fn validate(&self) -> Result<(), RequestError> {
        if !(MIN_ACCOUNT_COUNT..=MAX_ACCOUNT_COUNT).contains(&self.account_count) {
            return Err(RequestError::AccountCountOutOfRange(self.account_count));
        }
        if !(MIN_TWEETS_PER_ACCOUNT..=MAX_TWEETS_PER_ACCOUNT).contains(&self.tweets_per_account) {
            return Err(RequestError::TweetsPerAccountOutOfRange(
                self.tweets_per_account,
            ));
        }
        Ok(())
    }
}

/// A request whose shape is outside the allowed ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("account count {0} is outside {MIN_ACCOUNT_COUNT}..={MAX_ACCOUNT_COUNT}")]
    AccountCountOutOfRange(u32),

    #[error("tweets per account {0} is outside {MIN_TWEETS_PER_ACCOUNT}..={MAX_TWEETS_PER_ACCOUNT}")]
    TweetsPerAccountOutOfRange(u32),
}
