//! SVG markup assembly.
//!
//! Everything here is string emission: the fallible work (attribute/class source
//! normalization) happens up front so a failure aborts before any output exists.

use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};

use svgbar_core::{AttrMap, AttrValue, BarRecord, Result, attrs};

use crate::geometry::Geometry;
use crate::options::{ChartOptions, GradientDirection};

/// Process-wide render counter. Each render takes one increment and derives its gradient and
/// clip-path ids from it, so concurrent renders never collide.
static RENDER_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_render_ids() -> (String, String) {
    let n = RENDER_COUNTER.fetch_add(1, Ordering::Relaxed);
    (format!("svgbar-grad-{n}"), format!("svgbar-clip-{n}"))
}

/// Stringifies a coordinate/size for SVG attributes: round-trippable decimal form, with `-0`
/// and tiny float noise from our own arithmetic suppressed.
fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_attrs(out: &mut String, attrs: &AttrMap) {
    for (key, value) in attrs {
        let _ = write!(
            out,
            r#" {}="{}""#,
            escape_xml(key),
            escape_xml(&value.to_attr_string())
        );
    }
}

/// `(x1, y1, x2, y2)` for a gradient direction over the plot bounding box.
fn gradient_coords(
    direction: GradientDirection,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
) -> (f64, f64, f64, f64) {
    match direction {
        GradientDirection::Right => (x, y, x + w, y),
        GradientDirection::Down => (x, y, x, y + h),
        GradientDirection::DownRight => (x, y, x + w, y + h),
        GradientDirection::DownLeft => (x + w, y, x, y + h),
        GradientDirection::UpRight => (x, y + h, x + w, y),
        GradientDirection::UpLeft => (x + w, y + h, x, y),
    }
}

pub(crate) fn assemble(
    records: &[BarRecord],
    geometry: &Geometry,
    options: &ChartOptions,
) -> Result<String> {
    let (gradient_id, clip_id) = next_render_ids();

    let title = options
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    // All fallible normalization happens before any output is produced.
    let global_bar_attrs = match &options.bar_attrs {
        Some(source) => attrs::normalize_attr_source(source)?,
        None => AttrMap::new(),
    };
    let global_bar_class = match &options.bar_class {
        Some(source) => attrs::normalize_class_source(source)?,
        None => Vec::new(),
    };
    let svg_class = match &options.svg_class {
        Some(source) => attrs::normalize_class_source(source)?,
        None => Vec::new(),
    };
    let extra_svg_attrs = match &options.svg_attrs {
        Some(source) => attrs::normalize_attr_source(source)?,
        None => AttrMap::new(),
    };

    let format_value = |v: f64| -> String {
        match &options.value_formatter {
            Some(f) => f(v),
            None => svgbar_core::format::format_value(v),
        }
    };

    // Per-bar draw geometry; negative scaled widths clamp to zero here.
    let bars: Vec<(f64, f64)> = records
        .iter()
        .enumerate()
        .map(|(i, r)| (geometry.bar_y(i, options), geometry.scale(r.value).max(0.0)))
        .collect();

    let mut root = AttrMap::new();
    root.insert("xmlns".to_string(), "http://www.w3.org/2000/svg".into());
    if options.responsive {
        root.insert("width".to_string(), "100%".into());
    } else {
        root.insert("width".to_string(), AttrValue::Str(fmt(options.width)));
    }
    root.insert("height".to_string(), AttrValue::Str(fmt(geometry.height)));
    // The viewBox always uses the real pixel width, even in responsive mode.
    root.insert(
        "viewBox".to_string(),
        AttrValue::Str(format!("0 0 {} {}", fmt(options.width), fmt(geometry.height))),
    );
    if options.responsive {
        root.insert("preserveAspectRatio".to_string(), "none".into());
    }
    root.insert("role".to_string(), "img".into());
    root.insert(
        "aria-label".to_string(),
        AttrValue::Str(title.unwrap_or("Bar chart").to_string()),
    );
    root.insert(
        "font-family".to_string(),
        AttrValue::Str(options.font_family.clone()),
    );
    root.insert("font-size".to_string(), AttrValue::Str(fmt(options.font_size)));
    if let Some(class) = attrs::merge_class(&svg_class, &[]) {
        root.insert("class".to_string(), AttrValue::Str(class));
    }
    // Caller-supplied root attributes override same-key computed ones.
    let root = attrs::merge_attrs(&root, &extra_svg_attrs);

    let mut out = String::new();
    out.push_str("<svg");
    push_attrs(&mut out, &root);
    out.push('>');

    if let Some(background) = &options.background {
        let _ = write!(
            &mut out,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            fmt(options.width),
            fmt(geometry.height),
            escape_xml(background)
        );
    }

    if let Some(gradient) = &options.gradient {
        let (x1, y1, x2, y2) = gradient_coords(
            gradient.direction,
            options.padding.left,
            options.padding.top,
            geometry.inner_width,
            geometry.total_bars_height,
        );
        let _ = write!(
            &mut out,
            r#"<defs><linearGradient id="{gradient_id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}"><stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></linearGradient><clipPath id="{clip_id}">"#,
            fmt(x1),
            fmt(y1),
            fmt(x2),
            fmt(y2),
            escape_xml(&gradient.from),
            escape_xml(&gradient.to)
        );
        for (y, width) in &bars {
            let _ = write!(
                &mut out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"/>"#,
                fmt(options.padding.left),
                fmt(*y),
                fmt(*width),
                fmt(options.bar_height),
                fmt(options.bar_radius)
            );
        }
        out.push_str("</clipPath></defs>");
    }

    if let Some(title) = title {
        let _ = write!(
            &mut out,
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="{}" font-size="{}" font-weight="600">{}</text>"#,
            fmt(options.width / 2.0),
            fmt(options.padding.top / 2.0),
            escape_xml(&options.title_color),
            fmt(options.font_size + 4.0),
            escape_xml(title)
        );
    }

    for (record, (y, width)) in records.iter().zip(&bars) {
        let bar_center = y + options.bar_height / 2.0;

        let _ = write!(
            &mut out,
            r#"<text x="{}" y="{}" text-anchor="end" dominant-baseline="middle" fill="{}">{}</text>"#,
            fmt(options.padding.left - 8.0),
            fmt(bar_center),
            escape_xml(&options.label_color),
            escape_xml(&record.label)
        );

        let mut rect = AttrMap::new();
        rect.insert("x".to_string(), AttrValue::Str(fmt(options.padding.left)));
        rect.insert("y".to_string(), AttrValue::Str(fmt(*y)));
        rect.insert("width".to_string(), AttrValue::Str(fmt(*width)));
        rect.insert("height".to_string(), AttrValue::Str(fmt(options.bar_height)));
        rect.insert("rx".to_string(), AttrValue::Str(fmt(options.bar_radius)));
        // In gradient mode bars stay transparent; one shared gradient rect is clipped to their
        // union instead of repeating the paint per bar.
        let fill = if options.gradient.is_some() {
            "transparent"
        } else {
            options.bar_color.as_str()
        };
        rect.insert("fill".to_string(), fill.into());
        let item_class: Vec<String> = record.class.iter().cloned().collect();
        if let Some(class) = attrs::merge_class(&global_bar_class, &item_class) {
            rect.insert("class".to_string(), AttrValue::Str(class));
        }
        let merged = attrs::merge_attrs(&global_bar_attrs, &record.attrs);
        let rect = attrs::merge_attrs(&rect, &merged);

        out.push_str("<rect");
        push_attrs(&mut out, &rect);
        out.push_str("/>");

        if options.show_values {
            let _ = write!(
                &mut out,
                r#"<text x="{}" y="{}" dominant-baseline="middle" fill="{}">{}</text>"#,
                fmt(options.padding.left + width + 6.0),
                fmt(bar_center),
                escape_xml(&options.value_color),
                escape_xml(&format_value(record.value))
            );
        }
    }

    if options.gradient.is_some() && !records.is_empty() {
        let _ = write!(
            &mut out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="url(#{gradient_id})" clip-path="url(#{clip_id})"/>"#,
            fmt(options.padding.left),
            fmt(options.padding.top),
            fmt(geometry.inner_width),
            fmt(geometry.total_bars_height)
        );
    }

    if records.is_empty() {
        let _ = write!(
            &mut out,
            r#"<text x="{}" y="{}" dominant-baseline="middle" fill="{}">No data</text>"#,
            fmt(options.padding.left),
            fmt(options.padding.top + options.bar_height / 2.0),
            escape_xml(&options.label_color)
        );
    }

    out.push_str("</svg>");
    Ok(out)
}
