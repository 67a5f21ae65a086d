//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, rendering, or heavy logic, just data and simple helpers.

pub mod config;
pub mod profile;

pub use profile::{Badge, BadgeTone, FeatureLine, PROFILE, Profile, StatusGlyph};
