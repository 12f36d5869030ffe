//! AMP Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared foundation for the AMP workspace.
//!
//! # Overview
//!
//! This crate provides functionality used across all AMP workspace members:
//!
//! - **Error Handling**: the workspace error type and result alias
//! - **Logging**: centralized `tracing` configuration and initialization
//!
//! # Example
//!
//! ```no_run
//! use amp_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!
//!     tracing::info!("service started");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{AmpError, Result};
