//! Client for the Rainforest QA run API.
//!
//! This crate implements the client side of the run-trigger endpoint,
//! providing:
//!
//! - HTTP client for `POST /runs` with token auth
//! - A tagged test filter (all tests, or an explicit id list)
//! - Typed run records with per-browser state
//! - A closed error taxonomy callers can pattern-match on
//!
//! # Quick Start
//!
//! ```no_run
//! use rainforest_client::{RainforestClient, TestFilter};
//!
//! # async fn example() -> rainforest_client::ClientResult<()> {
//! // Create a client with a static access token
//! let client = RainforestClient::new("my-token")?;
//!
//! // Trigger a run for three specific tests
//! let run = client.run_tests(&TestFilter::TestIds(vec![1, 2, 3])).await?;
//! println!("run {} is {:?}", run.id, run.state);
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! Every request carries the configured token in the `CLIENT_TOKEN` header.
//! Static tokens only; there is no token exchange or refresh.
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `RAINFOREST_API_URL` | API base URL (default: `https://app.rainforestqa.com/api/1`) |
//! | `RAINFOREST_CLIENT_TOKEN` | Access token |
//! | `RAINFOREST_TIMEOUT` | Request timeout in seconds (default: 30) |
//!
//! Environment variables are read only by the explicit `from_env`
//! constructors, never during a call.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types
pub use client::RainforestClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use types::{BrowserState, RunResult, RunState, TestBrowser, TestFilter, TestRun};
