//! Kernel utilities shared across slices.
//! Keep this crate lightweight: language handling, the content wire model,
//! layered config loading and (behind `server`) the HTTP plumbing every slice plugs into.
//!
//! ## Language normalization
//! ```rust
//! use sdui_kernel::language::Languages;
//!
//! let languages = Languages::default();
//! assert_eq!(languages.normalize(Some("en")).as_str(), "en-US");
//! assert_eq!(languages.normalize(None).as_str(), "pt-BR");
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use sdui_kernel::config::load_api_config;
//! let cfg = load_api_config(Some("server")).unwrap();
//! ```
pub mod config;
pub mod error;
pub mod language;
pub mod model;
#[cfg(feature = "server")]
pub mod runtime;
#[cfg(feature = "server")]
pub mod server;

pub use sdui_domain as domain;
