//! Read-only resource store for SDUI documents and translation dictionaries.
//!
//! Content is addressed by `/`-separated keys such as
//! `s3/exclusive-area/black/home/en-US.json` or `i18n/black/en-US.json`.
//!
//! # Core Features
//!
//! - **[`ResourceStore`]**: the key → bytes seam every loader depends on.
//! - **[`FsResourceStore`]**: a filesystem store sandboxed to one canonical root;
//!   absolute keys, `..` escapes and symlinks leaving the root are refused.
//! - **[`MemoryResourceStore`]**: a thread-safe map with per-key read counters.
//! - **[`load_document`]**: JSON decoding that sorts failures into
//!   not-found / unreadable / malformed.
//!
//! # Examples
//!
//! ```rust
//! use sdui_resources::{load_document, MemoryResourceStore, DocumentError};
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DocumentError> {
//!     let store = MemoryResourceStore::new()
//!         .with("i18n/black/en-US.json", br#"{"vip_lounge":"Unlimited lounge access"}"#.to_vec());
//!
//!     let dict: HashMap<String, String> = load_document(&store, "i18n/black/en-US.json").await?;
//!     assert_eq!(dict["vip_lounge"], "Unlimited lounge access");
//!
//!     let missing = load_document::<HashMap<String, String>, _>(&store, "i18n/gold/en-US.json").await;
//!     assert!(missing.unwrap_err().is_not_found());
//!     Ok(())
//! }
//! ```

mod document;
mod error;
mod fs;
mod memory;
mod security;
mod store;

pub use document::load_document;
pub use error::{DocumentError, ResourceError};
pub use fs::{FsResourceStore, FsResourceStoreBuilder};
pub use memory::MemoryResourceStore;
pub use store::ResourceStore;
