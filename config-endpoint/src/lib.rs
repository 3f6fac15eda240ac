//! File-backed configuration document store for ConfigService
//!
//! This crate owns the single pricing-engine JSON document served by the
//! development server:
//!
//! - **Raw reads**: the stored bytes are returned verbatim, never re-parsed
//!   (a corrupt-but-readable file is still served)
//! - **Validated writes**: input must parse as JSON before anything touches
//!   the filesystem, and is persisted pretty-printed with 2-space indentation
//! - **Atomic replacement**: writes go to a temporary file in the document's
//!   directory and are renamed into place, so a concurrent reader observes
//!   either the old or the new document, never a mix
//!
//! The document path is injected at construction time, which keeps tests
//! isolated to temporary directories.
//!
//! # Example
//!
//! ```rust,no_run
//! use config_endpoint::ConfigStore;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), config_endpoint::StoreError> {
//!     let store = ConfigStore::new("/tmp/configs/PRICING_ENGINE.json");
//!     store.write_document(&json!({ "margin": 0.2 })).await?;
//!     let bytes = store.read_document().await?;
//!     println!("{}", String::from_utf8_lossy(&bytes));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;
