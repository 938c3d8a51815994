//! Core types for the Flocknet seeding workflow.
//!
//! Everything in this crate is plain data: identifiers minted by the
//! services, the request/report pair that frames one seeding run, and the
//! per-run index of which tweets belong to which account. No I/O happens
//! here.

pub mod account;
pub mod identifiers;
pub mod index;
pub mod report;
pub mod request;

pub use account::AccountFields;
pub use identifiers::{AccountId, FollowEdge, FollowId, TweetId};
pub use index::AccountTweetIndex;
pub use report::{ExecutionStatistics, SeedReport};
pub use request::{RequestError, SeedRequest};
