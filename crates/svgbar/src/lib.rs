#![forbid(unsafe_code)]

//! Headless horizontal bar chart renderer: flexible tabular data in, self-contained SVG
//! string out.
//!
//! Rendering is pure and synchronous — no I/O, no persistence, no shared state apart from a
//! process-wide counter that keeps gradient/clip-path ids unique across renders. The returned
//! string is already fully escaped; embed it as raw markup and do not escape it again.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use svgbar::{ChartOptions, render_bar_chart};
//!
//! let svg = render_bar_chart(
//!     &json!([["Rust", 92], ["Go", 76], ["C", 61]]),
//!     &ChartOptions {
//!         title: Some("Language scores".to_string()),
//!         ..ChartOptions::default()
//!     },
//! )
//! .unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! Data may be a list of `[label, value]` (or `[label, value, opts]`) tuples, a list of bare
//! numbers, or a mapping from label to value — see [`svgbar_core::normalize`].

pub mod geometry;
pub mod options;
pub mod svg;

pub use options::{
    ChartOptions, DEFAULT_FONT_STACK, Gradient, GradientDirection, Padding, ValueFormatter,
};
pub use svgbar_core::{AttrMap, AttrValue, BarRecord, Error, Result, normalize};

use geometry::Geometry;

/// Renders a horizontal bar chart to an SVG string.
///
/// Fails with the error kinds of [`svgbar_core::Error`] on invalid input; no partial output is
/// ever returned. Empty data is valid and renders a "No data" placeholder.
pub fn render_bar_chart(data: &serde_json::Value, options: &ChartOptions) -> Result<String> {
    let records = svgbar_core::normalize(data)?;
    tracing::debug!(
        records = records.len(),
        gradient = options.gradient.is_some(),
        responsive = options.responsive,
        "rendering bar chart"
    );
    let geometry = Geometry::layout(&records, options);
    svg::assemble(&records, &geometry, options)
}
