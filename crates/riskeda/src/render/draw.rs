//! Drawing chart trees onto a plotters drawing area.

use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::layout::{self, Scale, X_LABEL_AREA, node_size, title_band};
use super::palette::{category_color, default_color};
use crate::chart::{ChartNode, Mark, Panel, Series};
use crate::error::{EdaError, Result};
use crate::stats::{BoxSummary, CategoryCount, DensityCurve};

const FONT: &str = "sans-serif";
const LABEL_FONT: u32 = 10;
const AXIS_TITLE_FONT: u32 = 11;
/// Half the thickness of a bar or box, in category units.
const BAND_HALF: f64 = 0.35;

pub(crate) fn render_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> EdaError {
    EdaError::Render(err.to_string())
}

/// Fill the canvas white and draw the tree inside the padding.
pub(crate) fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    node: &ChartNode,
    scale: Scale,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;
    let pad = scale.px(layout::CANVAS_PADDING);
    let inner = root.margin(pad, pad, pad, pad);
    draw_node(&inner, node, scale)?;
    root.present().map_err(render_err)
}

fn draw_node<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    node: &ChartNode,
    scale: Scale,
) -> Result<()> {
    match node {
        ChartNode::Panel(panel) => draw_panel(area, panel, scale),
        ChartNode::HConcat(children) => {
            let widths: Vec<u32> = children.iter().map(|c| node_size(c).0).collect();
            let cells = area.split_by_breakpoints(layout::breakpoints(&widths, scale), [] as [i32; 0]);
            for (child, cell) in children.iter().zip(cells.iter().step_by(2)) {
                draw_node(&fit(cell, child, scale), child, scale)?;
            }
            Ok(())
        }
        ChartNode::VConcat(children) => {
            let heights: Vec<u32> = children.iter().map(|c| node_size(c).1).collect();
            let cells = area.split_by_breakpoints([] as [i32; 0], layout::breakpoints(&heights, scale));
            for (child, cell) in children.iter().zip(cells.iter().step_by(2)) {
                draw_node(&fit(cell, child, scale), child, scale)?;
            }
            Ok(())
        }
        ChartNode::Titled {
            title,
            font_size,
            child,
        } => {
            let (band, rest) = area.split_vertically(scale.px(title_band(*font_size)));
            let (width, height) = band.dim_in_pixel();
            let style = TextStyle::from(
                (FONT, scale.px(*font_size) as f64)
                    .into_font()
                    .style(FontStyle::Bold),
            )
            .pos(Pos::new(HPos::Center, VPos::Center));
            band.draw_text(title, &style, ((width / 2) as i32, (height / 2) as i32))
                .map_err(render_err)?;
            draw_node(&rest, child, scale)
        }
    }
}

/// Shrink a cell to the child's own size so panels keep their dimensions.
fn fit<DB: DrawingBackend>(
    cell: &DrawingArea<DB, Shift>,
    child: &ChartNode,
    scale: Scale,
) -> DrawingArea<DB, Shift> {
    let (w, h) = node_size(child);
    cell.clone().shrink((0, 0), (scale.px(w), scale.px(h)))
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    scale: Scale,
) -> Result<()> {
    match &panel.mark {
        Mark::Bar { bars } => draw_bars(area, panel, bars, scale),
        Mark::Area {
            curves,
            stroke_width,
            fill_opacity,
        } => draw_areas(area, panel, curves, *stroke_width, *fill_opacity, scale),
        Mark::Boxplot { boxes } => draw_boxes(area, panel, boxes, scale),
        Mark::Point {
            points,
            opacity,
            radius,
        } => draw_points(area, panel, points, *opacity, *radius, scale),
    }
}

fn chart_builder<'a, 'b, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    panel: &Panel,
    scale: Scale,
) -> ChartBuilder<'a, 'b, DB> {
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(scale.px(layout::PANEL_MARGIN))
        .x_label_area_size(scale.px(X_LABEL_AREA))
        .y_label_area_size(scale.px(layout::y_label_area(panel)));
    builder
}

/// Pad a numeric extent by 5% on each side; widen a degenerate one.
fn padded(min: f64, max: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    if span.abs() < f64::EPSILON {
        (min - 1.0)..(max + 1.0)
    } else {
        (min - span * 0.05)..(max + span * 0.05)
    }
}

/// Category rows sit at integer positions; the first category is on top.
fn category_range(count: usize) -> Range<f64> {
    -0.5..(count.max(1) as f64 - 0.5)
}

fn category_row(index: usize, count: usize) -> f64 {
    (count - 1 - index) as f64
}

fn category_label(labels: &[&str], value: f64) -> String {
    let row = value.round();
    if (value - row).abs() > 1e-6 || row < 0.0 {
        return String::new();
    }
    let row = row as usize;
    if row >= labels.len() {
        return String::new();
    }
    labels[labels.len() - 1 - row].to_string()
}

fn draw_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    bars: &[Series<CategoryCount>],
    scale: Scale,
) -> Result<()> {
    let n = bars.len().max(1);
    let max = bars.iter().map(|b| b.data.count).max().unwrap_or(0).max(1) as f64;
    let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
    let formatter = |v: &f64| category_label(&labels, *v);

    let mut chart = chart_builder(area, panel, scale)
        .build_cartesian_2d(0f64..max * 1.05, category_range(n))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&formatter)
        .x_desc(panel.x_title.as_str())
        .y_desc(panel.y_title.as_str())
        .label_style((FONT, scale.px(LABEL_FONT)))
        .axis_desc_style((FONT, scale.px(AXIS_TITLE_FONT)))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let y = category_row(i, n);
            Rectangle::new(
                [(0.0, y - BAND_HALF), (bar.data.count as f64, y + BAND_HALF)],
                category_color(bar.color).filled(),
            )
        }))
        .map_err(render_err)?;

    Ok(())
}

fn draw_areas<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    curves: &[Series<DensityCurve>],
    stroke_width: u32,
    fill_opacity: f64,
    scale: Scale,
) -> Result<()> {
    let xs = curves.iter().flat_map(|c| c.data.points.iter().map(|p| p.0));
    let x_min = xs.clone().fold(f64::INFINITY, f64::min);
    let x_max = xs.fold(f64::NEG_INFINITY, f64::max);
    let y_max = curves.iter().map(|c| c.data.peak()).fold(0.0, f64::max);
    let y_top = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let x_range = if curves.is_empty() { 0.0..1.0 } else { padded(x_min, x_max) };
    let mut chart = chart_builder(area, panel, scale)
        .build_cartesian_2d(x_range, 0f64..y_top)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_labels(5)
        .y_labels(5)
        .x_desc(panel.x_title.as_str())
        .y_desc(panel.y_title.as_str())
        .label_style((FONT, scale.px(LABEL_FONT)))
        .axis_desc_style((FONT, scale.px(AXIS_TITLE_FONT)))
        .draw()
        .map_err(render_err)?;

    for curve in curves {
        let color = category_color(curve.color);
        chart
            .draw_series(
                AreaSeries::new(curve.data.points.iter().copied(), 0.0, color.mix(fill_opacity))
                    .border_style(color.stroke_width(scale.px(stroke_width))),
            )
            .map_err(render_err)?
            .label(curve.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled()));
    }

    if !curves.is_empty() {
        chart
            .configure_series_labels()
            .label_font((FONT, scale.px(LABEL_FONT)))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()
            .map_err(render_err)?;
    }

    Ok(())
}

fn draw_boxes<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    boxes: &[Series<BoxSummary>],
    scale: Scale,
) -> Result<()> {
    let n = boxes.len().max(1);
    let x_min = boxes.iter().map(|b| b.data.min).fold(f64::INFINITY, f64::min);
    let x_max = boxes.iter().map(|b| b.data.max).fold(f64::NEG_INFINITY, f64::max);
    let labels: Vec<&str> = boxes.iter().map(|b| b.label.as_str()).collect();
    let formatter = |v: &f64| category_label(&labels, *v);

    let mut chart = chart_builder(area, panel, scale)
        .build_cartesian_2d(padded(x_min, x_max), category_range(n))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_labels(6)
        .y_labels(n)
        .y_label_formatter(&formatter)
        .x_desc(panel.x_title.as_str())
        .y_desc(panel.y_title.as_str())
        .label_style((FONT, scale.px(LABEL_FONT)))
        .axis_desc_style((FONT, scale.px(AXIS_TITLE_FONT)))
        .draw()
        .map_err(render_err)?;

    let line = scale.px(1);
    for (i, series) in boxes.iter().enumerate() {
        let y = category_row(i, n);
        let color = category_color(series.color);
        let s = &series.data;

        let whiskers = vec![
            PathElement::new(vec![(s.lower_whisker, y), (s.q1, y)], color.stroke_width(line)),
            PathElement::new(vec![(s.q3, y), (s.upper_whisker, y)], color.stroke_width(line)),
            PathElement::new(
                vec![(s.lower_whisker, y - BAND_HALF / 2.0), (s.lower_whisker, y + BAND_HALF / 2.0)],
                color.stroke_width(line),
            ),
            PathElement::new(
                vec![(s.upper_whisker, y - BAND_HALF / 2.0), (s.upper_whisker, y + BAND_HALF / 2.0)],
                color.stroke_width(line),
            ),
        ];
        chart.draw_series(whiskers).map_err(render_err)?;

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(s.q1, y - BAND_HALF), (s.q3, y + BAND_HALF)],
                color.filled(),
            )))
            .map_err(render_err)?;

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(s.median, y - BAND_HALF), (s.median, y + BAND_HALF)],
                WHITE.stroke_width(scale.px(2)),
            )))
            .map_err(render_err)?;

        chart
            .draw_series(
                s.outliers
                    .iter()
                    .map(|&v| Circle::new((v, y), scale.px(3), color.stroke_width(line))),
            )
            .map_err(render_err)?;
    }

    Ok(())
}

fn draw_points<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    points: &[(f64, f64)],
    opacity: f64,
    radius: u32,
    scale: Scale,
) -> Result<()> {
    let (x_min, x_max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.0), hi.max(p.0)));
    let (y_min, y_max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.1), hi.max(p.1)));

    let mut chart = chart_builder(area, panel, scale)
        .build_cartesian_2d(padded(x_min, x_max), padded(y_min, y_max))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_labels(3)
        .y_labels(3)
        .x_desc(panel.x_title.as_str())
        .y_desc(panel.y_title.as_str())
        .label_style((FONT, scale.px(LABEL_FONT)))
        .axis_desc_style((FONT, scale.px(AXIS_TITLE_FONT)))
        .draw()
        .map_err(render_err)?;

    let style = default_color().mix(opacity).stroke_width(scale.px(1));
    chart
        .draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, scale.px(radius), style)),
        )
        .map_err(render_err)?;

    Ok(())
}
