//! Kernel utilities shared across hosts.
//! Keep this crate lightweight; it re-exports the domain and provides layered config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use folio_kernel::config::load_config;
//! use folio_kernel::domain::config::RenderConfig;
//!
//! let cfg: RenderConfig = load_config(Some("folio.toml")).unwrap_or_default();
//! ```
pub mod config;

pub use folio_domain as domain;
