//! Rendering chart specifications to SVG or PNG files.

mod draw;
mod layout;
mod palette;

use std::io::Cursor;
use std::path::Path;

use log::debug;
use plotters::prelude::*;

use crate::chart::ChartNode;
use crate::error::{EdaError, Result};
use layout::Scale;

/// Output encodings, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    /// Resolve the format from a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        if ext.eq_ignore_ascii_case("svg") {
            Ok(ImageFormat::Svg)
        } else if ext.eq_ignore_ascii_case("png") {
            Ok(ImageFormat::Png)
        } else {
            Err(EdaError::UnsupportedFormat(
                "Only svg and png formats are supported".to_string(),
            ))
        }
    }
}

/// Render a chart into encoded image bytes.
///
/// `scale_factor` multiplies every PNG dimension; SVG output ignores it.
pub fn render_to_bytes(chart: &ChartNode, format: ImageFormat, scale_factor: f64) -> Result<Vec<u8>> {
    match format {
        ImageFormat::Svg => {
            let scale = Scale(1.0);
            let size = layout::canvas_size(chart, scale);
            let mut svg = String::new();
            {
                let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
                draw::draw_chart(&root, chart, scale)?;
            }
            Ok(svg.into_bytes())
        }
        ImageFormat::Png => {
            if !(scale_factor.is_finite() && scale_factor > 0.0) {
                return Err(EdaError::Render(format!(
                    "scale factor must be positive, got {scale_factor}"
                )));
            }
            let scale = Scale(scale_factor);
            let (width, height) = layout::canvas_size(chart, scale);
            let mut pixels = vec![0u8; width as usize * height as usize * 3];
            {
                let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
                draw::draw_chart(&root, chart, scale)?;
            }

            let buffer = image::RgbImage::from_raw(width, height, pixels)
                .ok_or_else(|| EdaError::Render("pixel buffer size mismatch".to_string()))?;
            let mut encoded = Cursor::new(Vec::new());
            buffer.write_to(&mut encoded, image::ImageFormat::Png)?;
            Ok(encoded.into_inner())
        }
    }
}

/// Render a chart and write it to `path`, choosing the encoder by extension.
///
/// Unsupported extensions fail before anything is written. Returns the
/// number of bytes written.
pub fn save_chart(chart: &ChartNode, path: impl AsRef<Path>, scale_factor: f64) -> Result<u64> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    let bytes = render_to_bytes(chart, format, scale_factor)?;

    std::fs::write(path, &bytes).map_err(|e| EdaError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes.len() as u64)
}
