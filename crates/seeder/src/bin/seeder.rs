//! Flocknet Seeder CLI
//!
//! A command-line tool for bulk-populating a Flocknet deployment with
//! generated accounts, follow relationships, and tweets.

use clap::{Parser, Subcommand};
use flocknet_client::{HttpSocialClient, ServiceEndpoints};
use flocknet_seeder::{Seeder, SeederConfig, SeederConfigFile};
use flocknet_types::SeedRequest;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "flocknet-seeder")]
#[command(about = "Bulk content seeder for a Flocknet deployment")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate a deployment with generated accounts, follows, and tweets
    Run {
        /// Base URL shared by all three services
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Account service base URL (overrides --endpoint)
        #[arg(long)]
        accounts_url: Option<String>,

        /// Follow service base URL (overrides --endpoint)
        #[arg(long)]
        follows_url: Option<String>,

        /// Tweet service base URL (overrides --endpoint)
        #[arg(long)]
        tweets_url: Option<String>,

        /// Number of accounts to create (1..=1000)
        #[arg(long, default_value = "10")]
        accounts: u32,

        /// Tweets to create per account (1..=100)
        #[arg(long, default_value = "5")]
        tweets_per_account: u32,

        /// Number of accounts to delete one tweet from
        #[arg(long, default_value = "0")]
        deletion_quota: u32,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Concurrent requests per step (1 = sequential)
        #[arg(long)]
        concurrency: Option<usize>,

        /// Per-request timeout (e.g. "10s", "500ms")
        #[arg(long)]
        timeout: Option<humantime::Duration>,

        /// TOML config file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the report as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },

    /// Check that the configured services answer their health endpoints
    Check {
        /// Base URL shared by all three services
        #[arg(short, long, default_value = "http://127.0.0.1:8080")]
        endpoint: String,

        /// Account service base URL (overrides --endpoint)
        #[arg(long)]
        accounts_url: Option<String>,

        /// Follow service base URL (overrides --endpoint)
        #[arg(long)]
        follows_url: Option<String>,

        /// Tweet service base URL (overrides --endpoint)
        #[arg(long)]
        tweets_url: Option<String>,
    },
}

#[allow(clippy::too_many_arguments)]
fn resolve_config(
    config_file: Option<PathBuf>,
    endpoint: Option<String>,
    accounts_url: Option<String>,
    follows_url: Option<String>,
    tweets_url: Option<String>,
    seed: Option<u64>,
    concurrency: Option<usize>,
    timeout: Option<humantime::Duration>,
) -> Result<SeederConfig, Box<dyn std::error::Error>> {
    let mut config = SeederConfig::default();
    if let Some(path) = config_file {
        config = SeederConfigFile::load(&path)?.apply(config);
    }
    if let Some(base) = endpoint {
        config.endpoints = ServiceEndpoints::single(base);
    }
    if let Some(url) = accounts_url {
        config.endpoints.accounts = url;
    }
    if let Some(url) = follows_url {
        config.endpoints.follows = url;
    }
    if let Some(url) = tweets_url {
        config.endpoints.tweets = url;
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(concurrency) = concurrency {
        config = config.with_concurrency(concurrency);
    }
    if let Some(timeout) = timeout {
        config = config.with_request_timeout(timeout.into());
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            endpoint,
            accounts_url,
            follows_url,
            tweets_url,
            accounts,
            tweets_per_account,
            deletion_quota,
            seed,
            concurrency,
            timeout,
            config,
            json,
        } => {
            tracing_subscriber::fmt::init();

            // Shape problems are rejected up front; quota feasibility is
            // judged inside the run and reported in the statistics.
            let request = SeedRequest::new(accounts, tweets_per_account, deletion_quota);
            request.validate()?;

            let config = resolve_config(
                config,
                endpoint,
                accounts_url,
                follows_url,
                tweets_url,
                seed,
                concurrency,
                timeout,
            )?;

            let client =
                HttpSocialClient::with_timeout(config.endpoints.clone(), config.request_timeout)?;
            let mut seeder = Seeder::new(Arc::new(client), config);

            let cancel = seeder.cancellation_token();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel.cancel();
                }
            });

            let report = seeder.run(&request).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print();
            }
        }

        Commands::Check {
            endpoint,
            accounts_url,
            follows_url,
            tweets_url,
        } => {
            tracing_subscriber::fmt::init();

            let mut endpoints = ServiceEndpoints::single(endpoint);
            if let Some(url) = accounts_url {
                endpoints.accounts = url;
            }
            if let Some(url) = follows_url {
                endpoints.follows = url;
            }
            if let Some(url) = tweets_url {
                endpoints.tweets = url;
            }

            let client = HttpSocialClient::new(endpoints)?;
            client.check_ready().await?;
            println!("All services reachable.");
        }
    }

    Ok(())
}
