//! SVG export of the donut chart.
//!
//! `render_layout_svg` draws the static container (ring + legend) from a
//! layout alone. `render_chart_svg` draws the current frame of an interactive
//! chart, adding the selection emphasis band and the value tag.
//!
//! These are pure functions with no I/O; they return a `String`.

use std::fmt::Write;

use crate::chart::{ChartLayout, ChartProps, DonutChart};
use crate::constants::{EMPHASIS_OPACITY, LEGEND_ROW_HEIGHT, LEGEND_SWATCH_SIZE};
use crate::errors::Result;
use crate::geometry::arc_path;
use crate::overlay::LabelOverlay;

/// Escape the five XML special characters for text and attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Drawable area of the exported document.
///
/// The ring canvas keeps its `[0, diameter]` coordinates so hit testing and
/// the value tag line up; the emphasis band sticks out past the radius, so
/// the view is padded by `outer_stroke_width` on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ViewBox {
    min_x: f64,
    min_y: f64,
    width: f64,
    height: f64,
}

impl ViewBox {
    fn for_layout(layout: &ChartLayout, props: &ChartProps) -> Self {
        let pad = props.outer_stroke_width;
        let legend_height = layout.legend.len() as f64 * LEGEND_ROW_HEIGHT;
        Self {
            min_x: 0.0 - pad,
            min_y: 0.0 - pad,
            width: props.diameter() + 2.0 * pad,
            height: props.diameter() + 2.0 * pad + legend_height,
        }
    }
}

fn write_preamble(out: &mut String, view: ViewBox) -> Result<()> {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="{x:.2} {y:.2} {w:.2} {h:.2}">"#,
        x = view.min_x,
        y = view.min_y,
        w = view.width,
        h = view.height,
    )?;
    Ok(())
}

fn write_ring(out: &mut String, layout: &ChartLayout, props: &ChartProps) -> Result<()> {
    let center = props.center();
    let radius = props.ring_centerline_radius();

    writeln!(out, r#"  <g class="ring" fill="none" stroke-linecap="round" stroke-linejoin="round">"#)?;
    for (index, span) in layout.visible_arcs() {
        let Some(d) = arc_path(center, radius, *span) else {
            continue;
        };
        let color = &layout.segments[index].color;
        writeln!(
            out,
            r#"    <path d="{d}" stroke="{color}" stroke-width="{:.2}" data-index="{index}"/>"#,
            props.stroke_width
        )?;
    }
    writeln!(out, "  </g>")?;
    Ok(())
}

fn write_emphasis(
    out: &mut String,
    layout: &ChartLayout,
    props: &ChartProps,
    index: usize,
) -> Result<()> {
    if props.outer_stroke_width <= 0.0 {
        return Ok(());
    }
    let Some(span) = layout.arcs.get(index) else {
        return Ok(());
    };
    let radius = props.radius + props.outer_stroke_width / 2.0;
    if let Some(d) = arc_path(props.center(), radius, *span) {
        let color = &layout.segments[index].color;
        writeln!(
            out,
            r#"  <path class="emphasis" d="{d}" fill="none" stroke="{color}" stroke-width="{:.2}" stroke-opacity="{EMPHASIS_OPACITY}" stroke-linecap="round"/>"#,
            props.outer_stroke_width
        )?;
    }
    Ok(())
}

fn write_legend(out: &mut String, layout: &ChartLayout, props: &ChartProps) -> Result<()> {
    if layout.legend.is_empty() {
        return Ok(());
    }
    // Legend rows start below the padded ring canvas
    let top = props.diameter() + props.outer_stroke_width;

    writeln!(out, r#"  <g class="legend" font-size="12">"#)?;
    for (row, item) in layout.legend.iter().enumerate() {
        let y = top + row as f64 * LEGEND_ROW_HEIGHT;
        let swatch_y = y + (LEGEND_ROW_HEIGHT - LEGEND_SWATCH_SIZE) / 2.0;
        writeln!(
            out,
            r#"    <rect x="0" y="{swatch_y:.2}" width="{s}" height="{s}" rx="2" fill="{}"/>"#,
            item.color,
            s = LEGEND_SWATCH_SIZE,
        )?;
        writeln!(
            out,
            r#"    <text x="{:.2}" y="{:.2}" dominant-baseline="middle">{} {}%</text>"#,
            LEGEND_SWATCH_SIZE + 8.0,
            y + LEGEND_ROW_HEIGHT / 2.0,
            xml_escape(&item.label),
            item.percentage,
        )?;
    }
    writeln!(out, "  </g>")?;
    Ok(())
}

fn write_overlay(out: &mut String, overlay: &LabelOverlay) -> Result<()> {
    let Some(content) = overlay.content() else {
        return Ok(());
    };
    if !overlay.is_visible() {
        return Ok(());
    }
    let config = overlay.config();
    let position = overlay.position();
    let swatch = 10.0;

    writeln!(
        out,
        r#"  <g class="value-label" opacity="{:.3}" transform="translate({:.2} {:.2})">"#,
        overlay.opacity(),
        position.x,
        position.y
    )?;
    writeln!(
        out,
        r##"    <rect width="{:.2}" height="{:.2}" rx="4" fill="#ffffff" stroke="#d9d9d9"/>"##,
        config.width, config.height
    )?;
    writeln!(
        out,
        r#"    <rect x="8" y="{:.2}" width="{swatch}" height="{swatch}" rx="2" fill="{}"/>"#,
        (config.height - swatch) / 2.0,
        content.color
    )?;
    writeln!(
        out,
        r#"    <text x="24" y="{:.2}" font-size="12" dominant-baseline="middle">{}</text>"#,
        config.height / 2.0,
        xml_escape(&content.text)
    )?;
    writeln!(out, "  </g>")?;
    Ok(())
}

/// Serializes the static ring and legend.
pub fn render_layout_svg(layout: &ChartLayout, props: &ChartProps) -> Result<String> {
    let mut out = String::new();
    write_preamble(&mut out, ViewBox::for_layout(layout, props))?;
    write_ring(&mut out, layout, props)?;
    write_legend(&mut out, layout, props)?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

/// Serializes the current frame of an interactive chart.
pub fn render_chart_svg(chart: &DonutChart) -> Result<String> {
    let layout = chart.layout();
    let props = chart.props();

    let mut out = String::new();
    write_preamble(&mut out, ViewBox::for_layout(layout, props))?;
    if let Some(index) = chart.selected_index() {
        write_emphasis(&mut out, layout, props, index)?;
    }
    write_ring(&mut out, layout, props)?;
    write_legend(&mut out, layout, props)?;
    write_overlay(&mut out, chart.overlay())?;
    writeln!(out, "</svg>")?;
    Ok(out)
}
