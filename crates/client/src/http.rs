//! Reqwest-backed implementation of the service capabilities.

use crate::api::SocialApi;
use crate::error::ClientError;
use crate::types::{
    CreateAccountRequest, CreateAccountResponse, CreateFollowRequest, CreateFollowResponse,
    CreateTweetRequest, CreateTweetResponse, ErrorResponse,
};
use async_trait::async_trait;
use flocknet_types::{AccountFields, AccountId, FollowId, TweetId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URLs for the three services the workflow talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoints {
    /// Account service base URL.
    pub accounts: String,
    /// Follow service base URL.
    pub follows: String,
    /// Tweet service base URL.
    pub tweets: String,
}

impl ServiceEndpoints {
    /// Point all three services at the same base URL.
    pub fn single(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            accounts: base.clone(),
            follows: base.clone(),
            tweets: base,
        }
    }

    /// The distinct base URLs, for reachability checks.
    pub fn distinct_bases(&self) -> Vec<&str> {
        let mut bases = vec![
            self.accounts.as_str(),
            self.follows.as_str(),
            self.tweets.as_str(),
        ];
        bases.sort_unstable();
        bases.dedup();
        bases
    }
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self::single("http://127.0.0.1:8080")
    }
}

/// HTTP implementation of [`SocialApi`].
///
/// One shared connection pool across all calls; each request carries the
/// configured timeout so no workflow item can block past it.
pub struct HttpSocialClient {
    endpoints: ServiceEndpoints,
    client: reqwest::Client,
}

impl HttpSocialClient {
    /// Create a client with the default request timeout.
    pub fn new(endpoints: ServiceEndpoints) -> Result<Self, ClientError> {
        Self::with_timeout(endpoints, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout.
    pub fn with_timeout(
        endpoints: ServiceEndpoints,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoints, client })
    }

    /// Check that every configured service answers its health endpoint.
    pub async fn check_ready(&self) -> Result<(), ClientError> {
        for base in self.endpoints.distinct_bases() {
            let url = format!("{}/health", base.trim_end_matches('/'));
            debug!(url = %url, "health check");
            self.client.get(&url).send().await?.error_for_status()?;
        }
        Ok(())
    }

    fn url(&self, base: &str, path: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), path)
    }

    async fn post_json<B, R>(&self, url: String, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(url = %url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(response.json().await?)
    }
}

/// Convert a non-success response into a rejection, preferring the
/// service-supplied error detail when the body carries one.
async fn rejection(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => "no error detail".to_string(),
    };
    ClientError::rejected(status, message)
}

#[async_trait]
impl SocialApi for HttpSocialClient {
    async fn create_account(&self, fields: &AccountFields) -> Result<AccountId, ClientError> {
        let request = CreateAccountRequest {
            username: fields.username.clone(),
            email: fields.email.clone(),
            display_name: fields.display_name.clone(),
            password: fields.password.clone(),
        };
        let url = self.url(&self.endpoints.accounts, "/users");
        let response: CreateAccountResponse = self.post_json(url, &request).await?;
        Ok(AccountId::new(response.id))
    }

    async fn create_follow(
        &self,
        follower: &AccountId,
        following: &AccountId,
    ) -> Result<FollowId, ClientError> {
        let request = CreateFollowRequest {
            follower_id: follower.as_str().to_string(),
            following_id: following.as_str().to_string(),
        };
        let url = self.url(&self.endpoints.follows, "/follows");
        let response: CreateFollowResponse = self.post_json(url, &request).await?;
        Ok(FollowId::new(response.id))
    }

    async fn create_tweet(
        &self,
        author: &AccountId,
        content: &str,
    ) -> Result<TweetId, ClientError> {
        let request = CreateTweetRequest {
            content: content.to_string(),
        };
        let url = self.url(
            &self.endpoints.tweets,
            &format!("/users/{}/tweets", author.as_str()),
        );
        let response: CreateTweetResponse = self.post_json(url, &request).await?;
        Ok(TweetId::new(response.id))
    }

    async fn delete_tweet(&self, tweet: &TweetId, author: &AccountId) -> Result<(), ClientError> {
        let url = self.url(
            &self.endpoints.tweets,
            &format!("/tweets/{}?author_id={}", tweet.as_str(), author.as_str()),
        );
        debug!(url = %url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(())
    }
}
