//! REST API for GTD Map.
//!
//! This crate exposes the bucketing engine over HTTP:
//! - The view type catalog
//! - Bucket views of an organization's active work items
//! - Bucket statistics with a recommendation for a selected bucket
//! - A 3D scene layout of a view
//!
//! # Example
//!
//! ```ignore
//! use gtdmap_api::{serve, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::with_item_store(ApiConfig::from_env());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
