//! Declarative chart specifications.
//!
//! A chart is a tree: leaves are [`Panel`]s carrying pre-aggregated data for
//! one mark type, inner nodes place children side by side, stack them, or
//! put a title above them. Nothing here touches a drawing backend.

use crate::stats::{BoxSummary, CategoryCount, DensityCurve};

/// Default title font size.
pub const DEFAULT_TITLE_SIZE: u32 = 13;

/// One series in the categorical color domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    /// Category label.
    pub label: String,
    /// Position in the sorted category domain, used to pick a color.
    pub color: usize,
    pub data: T,
}

/// Mark type plus the data it encodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Horizontal bars: one per category, length = count.
    Bar { bars: Vec<Series<CategoryCount>> },
    /// Filled area curves with an outline.
    Area {
        curves: Vec<Series<DensityCurve>>,
        stroke_width: u32,
        fill_opacity: f64,
    },
    /// Horizontal boxplots, one row per category.
    Boxplot { boxes: Vec<Series<BoxSummary>> },
    /// Scatter points.
    Point {
        points: Vec<(f64, f64)>,
        opacity: f64,
        radius: u32,
    },
}

impl Mark {
    /// Short name of the mark type.
    pub fn kind(&self) -> &'static str {
        match self {
            Mark::Bar { .. } => "bar",
            Mark::Area { .. } => "area",
            Mark::Boxplot { .. } => "boxplot",
            Mark::Point { .. } => "point",
        }
    }
}

/// A single plot with axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Plot area width in pixels.
    pub width: u32,
    /// Plot area height in pixels.
    pub height: u32,
    pub x_title: String,
    pub y_title: String,
    pub mark: Mark,
}

/// A node in a chart tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartNode {
    Panel(Panel),
    /// Children laid out left to right.
    HConcat(Vec<ChartNode>),
    /// Children laid out top to bottom.
    VConcat(Vec<ChartNode>),
    /// A centered title above one child.
    Titled {
        title: String,
        font_size: u32,
        child: Box<ChartNode>,
    },
}

impl ChartNode {
    pub fn hconcat(children: Vec<ChartNode>) -> Self {
        ChartNode::HConcat(children)
    }

    pub fn vconcat(children: Vec<ChartNode>) -> Self {
        ChartNode::VConcat(children)
    }

    /// Put a title above this node.
    pub fn titled(self, title: impl Into<String>) -> Self {
        ChartNode::Titled {
            title: title.into(),
            font_size: DEFAULT_TITLE_SIZE,
            child: Box::new(self),
        }
    }

    /// Set the font size of every title in the tree.
    pub fn with_title_size(self, size: u32) -> Self {
        match self {
            ChartNode::Panel(panel) => ChartNode::Panel(panel),
            ChartNode::HConcat(children) => ChartNode::HConcat(
                children.into_iter().map(|c| c.with_title_size(size)).collect(),
            ),
            ChartNode::VConcat(children) => ChartNode::VConcat(
                children.into_iter().map(|c| c.with_title_size(size)).collect(),
            ),
            ChartNode::Titled { title, child, .. } => ChartNode::Titled {
                title,
                font_size: size,
                child: Box::new(child.with_title_size(size)),
            },
        }
    }

    /// All panels in drawing order.
    pub fn panels(&self) -> Vec<&Panel> {
        let mut out = Vec::new();
        self.collect_panels(&mut out);
        out
    }

    fn collect_panels<'a>(&'a self, out: &mut Vec<&'a Panel>) {
        match self {
            ChartNode::Panel(panel) => out.push(panel),
            ChartNode::HConcat(children) | ChartNode::VConcat(children) => {
                for child in children {
                    child.collect_panels(out);
                }
            }
            ChartNode::Titled { child, .. } => child.collect_panels(out),
        }
    }

    /// Titles of `Titled` nodes with their font sizes, outermost first.
    pub fn titles(&self) -> Vec<(&str, u32)> {
        match self {
            ChartNode::Panel(_) => Vec::new(),
            ChartNode::HConcat(children) | ChartNode::VConcat(children) => {
                children.iter().flat_map(|c| c.titles()).collect()
            }
            ChartNode::Titled {
                title,
                font_size,
                child,
            } => {
                let mut out = vec![(title.as_str(), *font_size)];
                out.extend(child.titles());
                out
            }
        }
    }
}
