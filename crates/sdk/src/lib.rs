//! # Rocketlane SDK
//!
//! Rust client for the Rocketlane REST API (v1.0).
//!
//! Every endpoint is described by a static [`Operation`]. Calls validate
//! their arguments locally, send a single request with the `api-key`
//! header, and return the decoded JSON body, or `None` when Rocketlane
//! answered without usable content.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rocketlane_sdk::{Params, RocketlaneClient, RocketlaneResult};
//!
//! #[tokio::main]
//! async fn main() -> RocketlaneResult<()> {
//!     let client = RocketlaneClient::builder()
//!         .api_key("rl-your-api-key")
//!         .build()?;
//!
//!     // Typed facade
//!     let project = client.projects().get("200", Params::new()).await?;
//!     println!("{project:?}");
//!
//!     // Same call, by operation name
//!     let tasks = client
//!         .call("get_all_tasks", Params::new().set("projectId_eq", 200))
//!         .await?;
//!     println!("{tasks:?}");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod operation;
pub mod params;
pub mod transport;

// Re-export main client
pub use client::{RocketlaneClient, RocketlaneClientBuilder, APP_NAME};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use credentials::{CredentialStore, Credentials, EnvCredentialStore, StaticCredentialStore};
pub use error::{RocketlaneError, RocketlaneResult};

// Re-export the operation catalog
pub use api::{find_operation, OPERATIONS};
pub use operation::{Body, Method, Operation, Param, ParamType};
pub use params::Params;
