use crate::numerical::polynomial::Polynomial;
use crate::numerical::polynomial_roots::is_real;
use log::{debug, info};
use nalgebra::DVector;
use num_complex::Complex64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// sampling domain and density of every plot
pub const X_MIN: f64 = -10.0;
pub const X_MAX: f64 = 10.0;
pub const NUM_SAMPLES: usize = 400;
/// 6x4 inches at 100 dpi
pub const PLOT_SIZE: (u32, u32) = (600, 400);

/// red dot on the x axis at a real root
#[derive(Debug, Clone, PartialEq)]
pub struct RootMarker {
    pub x: f64,
    pub label: String,
}

/// Everything needed to draw the graph of an equation, independent of the backend.
#[derive(Debug, Clone)]
pub struct PlotModel {
    pub title: String,
    pub legend: String,
    pub x_desc: String,
    pub y_desc: String,
    pub x: DVector<f64>,
    pub y: DVector<f64>,
    pub markers: Vec<RootMarker>,
}

/// `n` evenly spaced points from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, n: usize) -> DVector<f64> {
    match n {
        0 => DVector::zeros(0),
        1 => DVector::from_element(1, start),
        _ => DVector::from_iterator(
            n,
            (0..n).map(|i| start + (end - start) * i as f64 / (n - 1) as f64),
        ),
    }
}

impl PlotModel {
    /// Samples f(x) given by ascending coefficients over [X_MIN, X_MAX] and marks the
    /// real roots. Roots with a non-zero imaginary part are left out of the picture.
    /// A repeated root (consecutive in the sorted solution set) gets a single marker.
    pub fn build(coeffs: &[f64], solutions: &[Complex64], title: &str) -> Result<PlotModel, String> {
        let f = Polynomial::new(coeffs.to_vec()).to_expr("x").lambdify1D()?;
        let x = linspace(X_MIN, X_MAX, NUM_SAMPLES);
        let y = x.map(|xi| f(xi));
        let mut markers: Vec<RootMarker> = solutions
            .iter()
            .filter(|root| is_real(root))
            .map(|root| RootMarker {
                x: root.re,
                label: format!("Root: {:.2}", root.re),
            })
            .collect();
        markers.dedup();
        debug!(
            "plot model for '{}': {} samples, {} of {} roots marked",
            title,
            x.len(),
            markers.len(),
            solutions.len()
        );
        Ok(PlotModel {
            title: format!("Graph of {}", title),
            legend: title.to_string(),
            x_desc: "x".to_string(),
            y_desc: "f(x)".to_string(),
            x,
            y,
            markers,
        })
    }

    /// y range covering the finite samples and the x axis, with a 5% margin
    pub fn y_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .y
            .iter()
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if hi - lo == 0.0 {
            return (lo - 1.0, hi + 1.0);
        }
        let margin = 0.05 * (hi - lo);
        (lo - margin, hi + margin)
    }
}

/// Renders the model into `path`. The backend follows the extension: `.svg` gives
/// an SVG file, anything else a PNG bitmap.
pub fn plot_equation(model: &PlotModel, path: &Path) -> Result<(), String> {
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        draw_on(SVGBackend::new(path, PLOT_SIZE).into_drawing_area(), model)?;
    } else {
        draw_on(BitMapBackend::new(path, PLOT_SIZE).into_drawing_area(), model)?;
    }
    info!("plot saved to {}", path.display());
    Ok(())
}

fn draw_on<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, model: &PlotModel) -> Result<(), String> {
    let (y_min, y_max) = model.y_range();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&model.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(X_MIN..X_MAX, y_min..y_max)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc(&model.x_desc)
        .y_desc(&model.y_desc)
        .draw()
        .map_err(|e| e.to_string())?;

    // x and y axes
    chart
        .draw_series(LineSeries::new(vec![(X_MIN, 0.0), (X_MAX, 0.0)], &BLACK))
        .map_err(|e| e.to_string())?;
    chart
        .draw_series(LineSeries::new(vec![(0.0, y_min), (0.0, y_max)], &BLACK))
        .map_err(|e| e.to_string())?;

    let series: Vec<(f64, f64)> = model
        .x
        .iter()
        .zip(model.y.iter())
        .filter(|(_, y)| y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect();
    chart
        .draw_series(LineSeries::new(series, &BLUE))
        .map_err(|e| e.to_string())?
        .label(model.legend.clone())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    let visible: Vec<&RootMarker> = model
        .markers
        .iter()
        .filter(|m| (X_MIN..=X_MAX).contains(&m.x))
        .collect();
    chart
        .draw_series(visible.iter().map(|m| Circle::new((m.x, 0.0), 4, RED.filled())))
        .map_err(|e| e.to_string())?;
    chart
        .draw_series(visible.iter().map(|m| {
            Text::new(
                m.label.clone(),
                (m.x, 0.0),
                ("sans-serif", 14).into_font().color(&RED),
            )
        }))
        .map_err(|e| e.to_string())?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace() {
        let x = linspace(X_MIN, X_MAX, NUM_SAMPLES);
        assert_eq!(x.len(), 400);
        assert_eq!(x[0], -10.0);
        assert_relative_eq!(x[399], 10.0, epsilon = 1e-12);
        assert_relative_eq!(x[1] - x[0], 20.0 / 399.0, epsilon = 1e-12);
        assert_eq!(linspace(1.0, 2.0, 1).len(), 1);
        assert_eq!(linspace(1.0, 2.0, 0).len(), 0);
    }

    #[test]
    fn test_model_samples_the_polynomial() {
        let coeffs = [-4.0, 0.0, 1.0];
        let roots = [Complex64::new(-2.0, 0.0), Complex64::new(2.0, 0.0)];
        let model = PlotModel::build(&coeffs, &roots, "x^2 - 4 = 0").unwrap();
        assert_eq!(model.title, "Graph of x^2 - 4 = 0");
        assert_eq!(model.legend, "x^2 - 4 = 0");
        assert_eq!(model.x_desc, "x");
        assert_eq!(model.y_desc, "f(x)");
        assert_eq!(model.y.len(), NUM_SAMPLES);
        assert_relative_eq!(model.y[0], 96.0, epsilon = 1e-9);
        for (x, y) in model.x.iter().zip(model.y.iter()) {
            assert_relative_eq!(*y, x * x - 4.0, epsilon = 1e-9);
        }
        assert_eq!(
            model.markers,
            vec![
                RootMarker { x: -2.0, label: "Root: -2.00".to_string() },
                RootMarker { x: 2.0, label: "Root: 2.00".to_string() },
            ]
        );
    }

    #[test]
    fn test_complex_roots_are_not_marked() {
        let roots = [Complex64::new(0.0, -1.0), Complex64::new(0.0, 1.0)];
        let model = PlotModel::build(&[1.0, 0.0, 1.0], &roots, "x^2 + 1 = 0").unwrap();
        assert!(model.markers.is_empty());
    }

    #[test]
    fn test_mixed_roots_only_real_marked() {
        let roots = [
            Complex64::new(-1.0, -2.0),
            Complex64::new(-1.0, 2.0),
            Complex64::new(0.5, 0.0),
        ];
        let model = PlotModel::build(&[2.5, -4.0, 3.0, -2.0], &roots, "cubic").unwrap();
        assert_eq!(model.markers.len(), 1);
        assert_eq!(model.markers[0].label, "Root: 0.50");
    }

    #[test]
    fn test_repeated_root_has_one_marker() {
        // (x - 2)^2 (x + 1)
        let roots = [
            Complex64::new(-1.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(2.0, 0.0),
        ];
        let model = PlotModel::build(&[4.0, 0.0, -3.0, 1.0], &roots, "cubic").unwrap();
        assert_eq!(
            model.markers,
            vec![
                RootMarker { x: -1.0, label: "Root: -1.00".to_string() },
                RootMarker { x: 2.0, label: "Root: 2.00".to_string() },
            ]
        );
    }

    #[test]
    fn test_y_range() {
        let model = PlotModel::build(&[0.0, 0.0], &[], "0 = 0").unwrap();
        assert_eq!(model.y_range(), (-1.0, 1.0));
        // x + 20 stays positive on [-10, 10] but the x axis is kept in view
        let model = PlotModel::build(&[20.0, 1.0], &[], "x + 20 = 0").unwrap();
        let (lo, hi) = model.y_range();
        assert!(lo < 0.0);
        assert!(hi > 30.0);
    }

    #[test]
    #[ignore = "needs system fonts for text rendering"]
    fn test_plot_equation_writes_svg_and_png() {
        let dir = tempfile::tempdir().unwrap();
        let roots = [Complex64::new(-2.0, 0.0), Complex64::new(2.0, 0.0)];
        let model = PlotModel::build(&[-4.0, 0.0, 1.0], &roots, "x^2 - 4 = 0").unwrap();
        for name in ["graph.svg", "graph.png"] {
            let path = dir.path().join(name);
            plot_equation(&model, &path).unwrap();
            assert!(path.exists());
        }
    }
}
