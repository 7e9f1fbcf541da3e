//! HTTP client for the Dayliz Supabase backend.
//!
//! This crate provides a thin, typed client over the PostgREST endpoints that
//! back the delivery-zone core: towns, zones, and user location records. It
//! deliberately performs single-shot requests only — retry, backoff, and
//! fallback decisions belong to the calling layer, which can classify failures
//! through [`ApiError::is_retryable`].
//!
//! # Features
//!
//! - **Environment-based configuration**: URLs and keys from environment variables
//! - **Request correlation**: every request carries a unique `X-Request-ID`
//! - **Typed rows**: endpoint modules expose the raw storage rows; model
//!   conversion lives in `dayliz-zone-data`
//!
//! # Example
//!
//! ```rust,no_run
//! use dayliz_api_client::DaylizClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DaylizClient::new()?;
//!
//!     let towns = client.towns().list_active().await?;
//!     println!("{} active towns", towns.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::DaylizClient;
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::DaylizClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{LocationsApi, TownsApi, ZonesApi};
    pub use crate::error::{ApiError, ApiResult};
}
