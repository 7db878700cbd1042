//! Chart configuration.

use std::sync::Arc;

use serde_json::Value;

/// Font stack used when the caller does not supply one.
pub const DEFAULT_FONT_STACK: &str = "ui-sans-serif, system-ui, sans-serif";

/// Pluggable value display strategy. The default policy lives in
/// [`svgbar_core::format::format_value`]; a caller-supplied formatter fully replaces it.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            left: 120.0,
            right: 48.0,
            top: 32.0,
            bottom: 24.0,
        }
    }
}

/// Gradient paint direction, mapped over the plot bounding box at assembly time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientDirection {
    #[default]
    Right,
    Down,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub from: String,
    pub to: String,
    pub direction: GradientDirection,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            from: "#4f46e5".to_string(),
            to: "#a78bfa".to_string(),
            direction: GradientDirection::Right,
        }
    }
}

/// All recognized chart options, with their defaults.
///
/// Color and geometry values pass through opaquely; they are never validated as CSS.
/// `svg_attrs`/`bar_attrs` accept a mapping, a list of `[key, value]` pairs, or a mixed list
/// including bare string flags; `svg_class`/`bar_class` accept a string or a nested list of
/// strings (see `svgbar_core::attrs`).
#[derive(Clone)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub width: f64,
    pub bar_height: f64,
    pub bar_gap: f64,
    pub padding: Padding,
    pub bar_radius: f64,
    pub bar_color: String,
    pub label_color: String,
    pub value_color: String,
    pub title_color: String,
    pub background: Option<String>,
    pub show_values: bool,
    pub value_formatter: Option<ValueFormatter>,
    pub font_family: String,
    pub font_size: f64,
    pub gradient: Option<Gradient>,
    pub svg_attrs: Option<Value>,
    pub svg_class: Option<Value>,
    pub bar_attrs: Option<Value>,
    pub bar_class: Option<Value>,
    pub responsive: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            width: 640.0,
            bar_height: 28.0,
            bar_gap: 2.0,
            padding: Padding::default(),
            bar_radius: 6.0,
            bar_color: "#4f46e5".to_string(),
            label_color: "#111827".to_string(),
            value_color: "#111827".to_string(),
            title_color: "#111827".to_string(),
            background: None,
            show_values: true,
            value_formatter: None,
            font_family: DEFAULT_FONT_STACK.to_string(),
            font_size: 12.0,
            gradient: None,
            svg_attrs: None,
            svg_class: None,
            bar_attrs: None,
            bar_class: None,
            responsive: false,
        }
    }
}
