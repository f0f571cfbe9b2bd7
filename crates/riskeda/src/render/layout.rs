//! Pixel sizes of chart nodes.
//!
//! Sizes are computed in unscaled pixels and multiplied by [`Scale`] only
//! when handed to the backend.

use crate::chart::{ChartNode, Mark, Panel};

pub(crate) const PANEL_MARGIN: u32 = 8;
pub(crate) const X_LABEL_AREA: u32 = 40;
pub(crate) const Y_LABEL_AREA: u32 = 50;
/// Wider y label area for panels with category names on the y axis.
pub(crate) const CATEGORY_Y_LABEL_AREA: u32 = 90;
pub(crate) const CONCAT_SPACING: u32 = 16;
pub(crate) const CANVAS_PADDING: u32 = 10;

/// Multiplier applied to every pixel dimension and font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Scale(pub f64);

impl Scale {
    pub(crate) fn px(&self, value: u32) -> u32 {
        (value as f64 * self.0).round().max(1.0) as u32
    }
}

/// Height reserved above a titled node.
pub(crate) fn title_band(font_size: u32) -> u32 {
    font_size * 2
}

pub(crate) fn y_label_area(panel: &Panel) -> u32 {
    match panel.mark {
        Mark::Bar { .. } | Mark::Boxplot { .. } => CATEGORY_Y_LABEL_AREA,
        Mark::Area { .. } | Mark::Point { .. } => Y_LABEL_AREA,
    }
}

/// Unscaled `(width, height)` of a node, padding excluded.
pub(crate) fn node_size(node: &ChartNode) -> (u32, u32) {
    match node {
        ChartNode::Panel(panel) => (
            panel.width + y_label_area(panel) + 2 * PANEL_MARGIN,
            panel.height + X_LABEL_AREA + 2 * PANEL_MARGIN,
        ),
        ChartNode::HConcat(children) => {
            let sizes: Vec<_> = children.iter().map(node_size).collect();
            let width = sizes.iter().map(|s| s.0).sum::<u32>() + gaps(sizes.len());
            let height = sizes.iter().map(|s| s.1).max().unwrap_or(0);
            (width, height)
        }
        ChartNode::VConcat(children) => {
            let sizes: Vec<_> = children.iter().map(node_size).collect();
            let width = sizes.iter().map(|s| s.0).max().unwrap_or(0);
            let height = sizes.iter().map(|s| s.1).sum::<u32>() + gaps(sizes.len());
            (width, height)
        }
        ChartNode::Titled {
            font_size, child, ..
        } => {
            let (w, h) = node_size(child);
            (w, h + title_band(*font_size))
        }
    }
}

/// Canvas size for a whole chart, scaled.
pub(crate) fn canvas_size(node: &ChartNode, scale: Scale) -> (u32, u32) {
    let (w, h) = node_size(node);
    (
        scale.px(w + 2 * CANVAS_PADDING),
        scale.px(h + 2 * CANVAS_PADDING),
    )
}

fn gaps(count: usize) -> u32 {
    count.saturating_sub(1) as u32 * CONCAT_SPACING
}

/// Offsets where children start and end along one axis, as alternating
/// `[end_0, start_1, end_1, start_2, ...]` breakpoints.
pub(crate) fn breakpoints(extents: &[u32], scale: Scale) -> Vec<i32> {
    let mut points = Vec::with_capacity(extents.len() * 2);
    let mut offset = 0;
    for (i, extent) in extents.iter().enumerate() {
        offset += extent;
        points.push(scale.px(offset) as i32);
        if i + 1 < extents.len() {
            offset += CONCAT_SPACING;
            points.push(scale.px(offset) as i32);
        }
    }
    points
}
