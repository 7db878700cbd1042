#![forbid(unsafe_code)]

//! Data normalization + attribute model for the `svgbar` horizontal bar chart renderer.
//!
//! This crate owns everything that happens before layout:
//! - [`normalize`]: flexible input shapes -> ordered [`BarRecord`] sequence
//! - [`attrs`]: attribute/class source merging with item-over-global precedence
//! - [`format`]: the default value display policy
//!
//! It performs no I/O and holds no state; every entity lives inside one render call.

pub mod attrs;
pub mod error;
pub mod format;
pub mod model;
pub mod normalize;

pub use error::{Error, Result};
pub use model::{AttrMap, AttrValue, BarRecord};
pub use normalize::normalize;
