//! # Profile
//!
//! The one presentational component of the site, [`StaticProfileView`], plus helpers that
//! serialize it to HTML without a browser.
//!
//! The view takes no props and reads only the compile-time [`PROFILE`](folio_domain::PROFILE),
//! so any host (desktop window, static file, tests) sees the same tree.
//!
//! ```rust
//! let html = folio_profile::render_fragment();
//! assert!(html.contains("David Vizena"));
//! ```

mod ssr;
mod view;

pub use crate::ssr::{render_document, render_fragment, render_head_assets};
pub use crate::view::StaticProfileView;
pub use folio_domain::config::DocumentConfig;
