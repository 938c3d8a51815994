//! Scripted in-memory collaborator for tests.
//!
//! Mints sequential identifiers, records every call, and fails on a
//! schedule, so workflow tests can exercise per-item isolation without a
//! network. Enabled with the `test-utils` feature.

use crate::api::SocialApi;
use crate::error::ClientError;
use async_trait::async_trait;
use flocknet_types::{AccountFields, AccountId, FollowId, TweetId};
use parking_lot::Mutex;

/// Failure schedule for the scripted collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureScript {
    /// Every call succeeds.
    #[default]
    None,
    /// Every nth call fails, counting across all capabilities (1-based).
    EveryNth(u64),
    /// Every call fails.
    All,
    /// Only deletions fail.
    Deletes,
}

/// One recorded call, with the outcome the fake returned.
///
/// `result: None` (or `ok: false`) means the call was scripted to fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    CreateAccount {
        username: String,
        result: Option<AccountId>,
    },
    CreateFollow {
        follower: AccountId,
        following: AccountId,
        result: Option<FollowId>,
    },
    CreateTweet {
        author: AccountId,
        content: String,
        result: Option<TweetId>,
    },
    DeleteTweet {
        tweet: TweetId,
        author: AccountId,
        ok: bool,
    },
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<RecordedCall>,
    call_counter: u64,
    next_account: u64,
    next_follow: u64,
    next_tweet: u64,
}

impl State {
    fn should_fail(&mut self, script: FailureScript, is_delete: bool) -> bool {
        self.call_counter += 1;
        match script {
            FailureScript::None => false,
            FailureScript::EveryNth(n) => self.call_counter % n.max(1) == 0,
            FailureScript::All => true,
            FailureScript::Deletes => is_delete,
        }
    }
}

/// In-memory [`SocialApi`] with scripted failures and full call recording.
pub struct ScriptedApi {
    script: FailureScript,
    state: Mutex<State>,
}

impl ScriptedApi {
    /// Collaborator that succeeds on every call.
    pub fn succeeding() -> Self {
        Self::with_script(FailureScript::None)
    }

    /// Collaborator that fails every `n`th call across all capabilities.
    pub fn failing_every(n: u64) -> Self {
        Self::with_script(FailureScript::EveryNth(n))
    }

    /// Collaborator that fails every call.
    pub fn always_failing() -> Self {
        Self::with_script(FailureScript::All)
    }

    /// Collaborator that fails deletions only.
    pub fn failing_deletes() -> Self {
        Self::with_script(FailureScript::Deletes)
    }

    /// Collaborator with an explicit failure schedule.
    pub fn with_script(script: FailureScript) -> Self {
        Self {
            script,
            state: Mutex::new(State::default()),
        }
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().calls.clone()
    }

    /// Total number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }

    /// Account ids issued by successful account creations.
    pub fn issued_accounts(&self) -> Vec<AccountId> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::CreateAccount {
                    result: Some(id), ..
                } => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Follow ids issued by successful follow creations.
    pub fn issued_follows(&self) -> Vec<FollowId> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::CreateFollow {
                    result: Some(id), ..
                } => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Tweet ids issued by successful tweet creations.
    pub fn issued_tweets(&self) -> Vec<TweetId> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::CreateTweet {
                    result: Some(id), ..
                } => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Tweet ids removed by successful deletions.
    pub fn deleted_tweets(&self) -> Vec<TweetId> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::DeleteTweet {
                    tweet, ok: true, ..
                } => Some(tweet.clone()),
                _ => None,
            })
            .collect()
    }
}

fn scripted_failure() -> ClientError {
    ClientError::rejected(503, "scripted failure")
}

#[async_trait]
impl SocialApi for ScriptedApi {
    async fn create_account(&self, fields: &AccountFields) -> Result<AccountId, ClientError> {
        let mut state = self.state.lock();
        let fail = state.should_fail(self.script, false);
        let result = if fail {
            None
        } else {
            state.next_account += 1;
            Some(AccountId::new(format!("user-{}", state.next_account)))
        };
        state.calls.push(RecordedCall::CreateAccount {
            username: fields.username.clone(),
            result: result.clone(),
        });
        result.ok_or_else(scripted_failure)
    }

    async fn create_follow(
        &self,
        follower: &AccountId,
        following: &AccountId,
    ) -> Result<FollowId, ClientError> {
        let mut state = self.state.lock();
        let fail = state.should_fail(self.script, false);
        let result = if fail {
            None
        } else {
            state.next_follow += 1;
            Some(FollowId::new(format!("follow-{}", state.next_follow)))
        };
        state.calls.push(RecordedCall::CreateFollow {
            follower: follower.clone(),
            following: following.clone(),
            result: result.clone(),
        });
        result.ok_or_else(scripted_failure)
    }

    async fn create_tweet(
        &self,
        author: &AccountId,
        content: &str,
    ) -> Result<TweetId, ClientError> {
        let mut state = self.state.lock();
        let fail = state.should_fail(self.script, false);
        let result = if fail {
            None
        } else {
            state.next_tweet += 1;
            Some(TweetId::new(format!("tweet-{}", state.next_tweet)))
        };
        state.calls.push(RecordedCall::CreateTweet {
            author: author.clone(),
            content: content.to_string(),
            result: result.clone(),
        });
        result.ok_or_else(scripted_failure)
    }

    async fn delete_tweet(&self, tweet: &TweetId, author: &AccountId) -> Result<(), ClientError> {
        let mut state = self.state.lock();
        let fail = state.should_fail(self.script, true);
        state.calls.push(RecordedCall::DeleteTweet {
            tweet: tweet.clone(),
            author: author.clone(),
            ok: !fail,
        });
        if fail {
            Err(scripted_failure())
        } else {
            Ok(())
        }
    }
}
