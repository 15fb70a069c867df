//! Canonicalization of heterogeneous section and slide payloads.
//!
//! The content agent returns sections and slides as strings, arrays, or
//! objects with inconsistent key names. This crate converts any such payload
//! into the canonical `storydeck_core` records with deterministic defaults.
//! Normalization is total: it never fails and never panics. Unrecognized
//! shapes degrade to best-effort text splitting, and unusable charts are
//! dropped with a warning rather than carried forward broken.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use storydeck_normalize::normalize_section;
//!
//! let raw = json!({
//!     "name": "Market sizing",
//!     "points": ["TAM $4.2B", "CAGR 11%"],
//! });
//! let section = normalize_section(&raw, 0);
//! assert_eq!(section.title(), "Market sizing");
//! assert_eq!(section.key_points().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chart;
pub mod heuristics;
mod section;
mod slide;
mod value;

pub use chart::normalize_chart;
pub use section::normalize_section;
pub use slide::normalize_slide;
