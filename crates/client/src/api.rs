//! The service capabilities consumed by the seeding workflow.

use crate::ClientError;
use async_trait::async_trait;
use flocknet_types::{AccountFields, AccountId, FollowId, TweetId};

/// The four capabilities the seeding workflow needs from the platform.
///
/// Implementations must treat each call as an independent request/response
/// operation; the workflow isolates failures per item and keeps going, so a
/// returned error must never poison later calls.
#[async_trait]
pub trait SocialApi: Send + Sync {
    /// Create one account, returning the identifier the service minted.
    async fn create_account(&self, fields: &AccountFields) -> Result<AccountId, ClientError>;

    /// Make `follower` follow `following`.
    async fn create_follow(
        &self,
        follower: &AccountId,
        following: &AccountId,
    ) -> Result<FollowId, ClientError>;

    /// Create one tweet authored by `author`.
    async fn create_tweet(&self, author: &AccountId, content: &str)
        -> Result<TweetId, ClientError>;

    /// Delete one tweet on behalf of its author.
    async fn delete_tweet(&self, tweet: &TweetId, author: &AccountId) -> Result<(), ClientError>;
}
