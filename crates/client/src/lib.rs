//! Thin HTTP client wrappers for the Flocknet services.
//!
//! The seeding workflow consumes exactly four service capabilities, exposed
//! here as the [`SocialApi`] trait: account creation, follow creation, tweet
//! creation, and tweet deletion. [`HttpSocialClient`] is the production
//! implementation speaking JSON to the three service base URLs. Every call
//! is an independent request whose failure is returned as a recoverable
//! [`ClientError`]; retrying is the caller's decision, not this crate's.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use api::SocialApi;
pub use error::ClientError;
pub use http::{HttpSocialClient, ServiceEndpoints};
