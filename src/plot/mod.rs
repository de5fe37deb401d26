//! CDF chart rendering
//!
//! Both empirical CDFs are drawn as line series on one chart, written as an
//! SVG file with [`plotters`]. The SVG backend emits text as markup, so no
//! system fonts are needed.

use crate::{
    error::{AppError, Result},
    models::CdfCurve,
};
use plotters::prelude::*;
use std::path::Path;

/// Chart size in pixels
const CHART_SIZE: (u32, u32) = (1024, 768);

/// Line colors, cycled per curve
const SERIES_COLORS: [RGBColor; 4] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
];

/// Draw every curve on one chart with axes "x" and "Cumulative Probability"
pub fn render_cdf_plot(curves: &[CdfCurve], output_path: &Path) -> Result<()> {
    let (x_min, x_max) = x_bounds(curves)
        .ok_or_else(|| AppError::plot("No CDF points to draw"))?;

    let root = SVGBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| AppError::plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0.0f64..1.05f64)
        .map_err(|e| AppError::plot(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("Cumulative Probability")
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| AppError::plot(e.to_string()))?;

    for (index, curve) in curves.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(curve.points.iter().copied(), color.stroke_width(2)))
            .map_err(|e| AppError::plot(e.to_string()))?
            .label(curve.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| AppError::plot(e.to_string()))?;

    root.present()
        .map_err(|e| AppError::plot(format!("Failed to write '{}': {}", output_path.display(), e)))?;

    Ok(())
}

/// Horizontal extent over all curves, padded so single-valued data still has width
fn x_bounds(curves: &[CdfCurve]) -> Option<(f64, f64)> {
    let (min, max) = curves
        .iter()
        .filter_map(CdfCurve::x_range)
        .fold(None, |acc: Option<(f64, f64)>, (lo, hi)| match acc {
            Some((min, max)) => Some((min.min(lo), max.max(hi))),
            None => Some((lo, hi)),
        })?;

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (min.abs() * 0.05).max(0.5)
    };
    Some((min - pad, max + pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn curve(label: &str, xs: &[f64]) -> CdfCurve {
        let n = xs.len() as f64;
        CdfCurve {
            label: label.to_string(),
            points: xs.iter().enumerate().map(|(i, &x)| (x, (i + 1) as f64 / n)).collect(),
        }
    }

    #[test]
    fn test_x_bounds_padding() {
        let (lo, hi) = x_bounds(&[curve("a", &[0.0, 10.0]), curve("b", &[5.0, 20.0])]).unwrap();
        assert!((lo - -1.0).abs() < 1e-12);
        assert!((hi - 21.0).abs() < 1e-12);

        let (lo, hi) = x_bounds(&[curve("a", &[2.0]), curve("b", &[2.0])]).unwrap();
        assert!(lo < 2.0 && hi > 2.0);

        assert!(x_bounds(&[]).is_none());
    }

    #[test]
    fn test_render_writes_svg() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cdf.svg");

        render_cdf_plot(&[curve("wt.dat", &[0.4, 0.5, 0.6]), curve("mut.dat", &[0.8, 0.9])], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("Cumulative Probability"));
        assert!(content.contains("wt.dat"));
    }

    #[test]
    fn test_render_without_points_fails() {
        let dir = TempDir::new().unwrap();
        let err = render_cdf_plot(&[], &dir.path().join("cdf.svg")).unwrap_err();
        assert_eq!(err.category(), "PLOT");
    }

    #[test]
    fn test_render_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("cdf.svg");
        let err = render_cdf_plot(&[curve("a", &[1.0, 2.0])], &path).unwrap_err();
        assert_eq!(err.category(), "PLOT");
    }
}
