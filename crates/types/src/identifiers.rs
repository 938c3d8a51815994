//! Domain-specific identifier types.
//!
//! Identifiers are minted by the remote services and opaque to this side;
//! they are kept as string newtypes so the wire shape stays untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identifier minted by the account service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    /// Create an AccountId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        AccountId(id.into())
    }

    /// Get the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tweet identifier minted by the tweet service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TweetId(pub String);

impl TweetId {
    /// Create a TweetId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        TweetId(id.into())
    }

    /// Get the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Follow-relationship identifier minted by the follow service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FollowId(pub String);

impl FollowId {
    /// Create a FollowId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        FollowId(id.into())
    }

    /// Get the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FollowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One follow relationship to be created: `follower` starts following
/// `following`.
///
/// The hub account of a generated graph is distinguished only by its
/// position in the edges derived for a run, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEdge {
    /// The account doing the following.
    pub follower: AccountId,
    /// The account being followed.
    pub following: AccountId,
}

impl fmt::Display for FollowEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.follower, self.following)
    }
}
