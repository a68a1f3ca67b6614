//! Single-shot blocking HTTP retrieval of image payloads.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and response types
//! - [`core`] - Pure source validation
//! - [`effects`] - Network I/O behind the [`HttpClient`] trait
//!
//! The whole body is buffered in memory. There is no retry and no size cap;
//! callers decide what a failure means for their batch.

pub mod core;
pub mod data;
mod effects;
mod error;

pub use crate::core::parse_source;
pub use data::{FetchOptions, HttpResponse};
pub use effects::{Fetcher, HttpClient};

#[cfg(feature = "reqwest")]
pub use effects::{ClientSetting, ReqwestClient};

pub use error::{FetchError, Result};
pub use url::Url;
