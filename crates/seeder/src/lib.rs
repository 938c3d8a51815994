//! Flocknet Seeder
//!
//! Bulk-populates a Flocknet deployment through its service APIs: creates a
//! batch of accounts, derives a hub-centered follow graph among them, fills
//! each account with generated tweets, then performs bounded random
//! deletions. Every collaborator call is isolated — a failed item is
//! recorded and skipped, never fatal — and the run always ends with a
//! [`SeedReport`](flocknet_types::SeedReport) of per-step statistics.
//!
//! # Architecture
//!
//! - **Content generation**: random handles, emails, and tweet bodies that
//!   satisfy the services' format constraints
//! - **Workflow steps**: account creation, follow graph, tweet population,
//!   deletion-quota check, random deletion — a strictly forward pipeline
//! - **Orchestration**: the [`Seeder`] sequences the steps, owns the seeded
//!   RNG and the cancellation token, and assembles the report
//! - **Statistics**: error list and collaborator-call latency histogram
//!   accumulated across the run
//!
//! # Example
//!
//! ```ignore
//! use flocknet_client::{HttpSocialClient, ServiceEndpoints};
//! use flocknet_seeder::{Seeder, SeederConfig};
//! use flocknet_types::SeedRequest;
//! use std::sync::Arc;
//!
//! let config = SeederConfig::default().with_seed(42);
//! let client = HttpSocialClient::new(ServiceEndpoints::single("http://localhost:8080"))?;
//! let mut seeder = Seeder::new(Arc::new(client), config);
//!
//! let report = seeder.run(&SeedRequest::new(10, 5, 3)).await;
//! report.print();
//! ```

pub mod config;
pub mod content;
pub mod runner;
pub mod stats;
pub mod workflow;

pub use config::{ConfigError, SeederConfig, SeederConfigFile};
pub use runner::{Phase, Seeder};
