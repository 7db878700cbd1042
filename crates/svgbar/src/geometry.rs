//! Scale-aware bar geometry.

use svgbar_core::BarRecord;

use crate::options::ChartOptions;

/// Derived canvas and scale values. Recomputed on every render, owned by one render call,
/// discarded afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub inner_width: f64,
    pub total_bars_height: f64,
    pub height: f64,
    pub max_value: f64,
}

impl Geometry {
    pub fn layout(records: &[BarRecord], options: &ChartOptions) -> Self {
        let inner_width = (options.width - options.padding.left - options.padding.right).max(0.0);
        let n = records.len();
        let total_bars_height = if n == 0 {
            // Reserve visual space for the empty-state placeholder.
            options.bar_height
        } else {
            n as f64 * options.bar_height + (n - 1) as f64 * options.bar_gap
        };
        let height = options.padding.top + total_bars_height + options.padding.bottom;
        let max_value = records.iter().map(|r| r.value).fold(0.0_f64, f64::max);

        Self {
            inner_width,
            total_bars_height,
            height,
            max_value,
        }
    }

    /// Linear map from the value domain `[0, max_value]` to pixel width `[0, inner_width]`.
    /// Degenerates to the zero function when either end is zero. Negative values map to
    /// negative widths; the assembler clamps those at draw time.
    pub fn scale(&self, v: f64) -> f64 {
        if self.max_value == 0.0 || self.inner_width == 0.0 {
            0.0
        } else {
            v / self.max_value * self.inner_width
        }
    }

    /// Top edge of the bar at `index` (0-based).
    pub fn bar_y(&self, index: usize, options: &ChartOptions) -> f64 {
        options.padding.top + index as f64 * (options.bar_height + options.bar_gap)
    }
}
