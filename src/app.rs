//! # Equation solver and visualizer
//!
//! The form is modelled as a plain record ([`FormState`]) and every interaction as one
//! call of [`render`], a pure function from the current form to what should be shown
//! ([`RenderOutput`]). Nothing survives between two calls: the whole session is derived
//! again from the form values each time.
//!
//! Data flows one way: form -> solver -> plot model -> output.
use crate::Utils::plots::PlotModel;
use crate::numerical::linear_equation::{LinearSolution, solve_linear};
use crate::numerical::polynomial::Polynomial;
use crate::numerical::polynomial_roots::{RootMethod, solve_polynomial_with};
use crate::symbolic::symbolic_print::format_number;
use itertools::Itertools;
use log::info;
use num_complex::Complex64;
use strum_macros::{Display, EnumIter, EnumString};

/// where the task document is turned into a form and output settings
pub mod task_config;

pub const APP_TITLE: &str = "Equation Solver and Visualizer";
pub const LINEAR_SUBHEADER: &str = "Solve a Linear Equation (ax + b = 0)";
pub const POLYNOMIAL_SUBHEADER: &str = "Solve a Polynomial Equation";
pub const ZERO_A_MESSAGE: &str = "Coefficient 'a' cannot be 0 for a linear equation.";

/// the single discrete choice of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum EquationKind {
    #[default]
    Linear,
    Polynomial,
}

/// Current values of every field of the form.
///
/// `coefficients` are listed the way the form asks for them: from x^degree down to x^0.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub kind: EquationKind,
    pub a: f64,
    pub b: f64,
    pub degree: i64,
    pub coefficients: Vec<f64>,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            kind: EquationKind::Linear,
            a: 1.0,
            b: 0.0,
            degree: 2,
            coefficients: Vec::new(),
        }
    }
}

/// what one run of the form shows
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub title: String,
    pub subheader: String,
    pub lines: Vec<String>,
    pub solutions: Vec<Complex64>,
    pub plot: Option<PlotModel>,
}

/// Reads one coefficient per power from `degree` down to 0 (a missing entry takes the
/// field default 0.0, surplus entries are ignored) and reverses the result into
/// ascending power order.
pub fn collect_coefficients(degree: usize, entered: &[f64]) -> Vec<f64> {
    let descending: Vec<f64> = (0..=degree)
        .map(|slot| entered.get(slot).copied().unwrap_or(0.0))
        .collect();
    // Reverse to match the correct power order
    Polynomial::from_descending(descending).into_coeffs()
}

/// `2`, `-0.5`, `i`, `-1 - 2i`, `0.5 + 1.5i`
pub fn format_root(root: &Complex64) -> String {
    fn imaginary(im: f64) -> String {
        if im == 1.0 {
            "i".to_string()
        } else {
            format!("{}i", format_number(im))
        }
    }
    if root.im == 0.0 {
        format_number(root.re)
    } else if root.re == 0.0 {
        if root.im < 0.0 {
            format!("-{}", imaginary(-root.im))
        } else {
            imaginary(root.im)
        }
    } else if root.im < 0.0 {
        format!("{} - {}", format_number(root.re), imaginary(-root.im))
    } else {
        format!("{} + {}", format_number(root.re), imaginary(root.im))
    }
}

/// One full pass over the form.
pub fn render(form: &FormState, method: RootMethod) -> Result<RenderOutput, String> {
    info!("rendering {} equation form", form.kind);
    match form.kind {
        EquationKind::Linear => render_linear(form),
        EquationKind::Polynomial => render_polynomial(form, method),
    }
}

fn render_linear(form: &FormState) -> Result<RenderOutput, String> {
    let mut output = RenderOutput {
        title: APP_TITLE.to_string(),
        subheader: LINEAR_SUBHEADER.to_string(),
        lines: Vec::new(),
        solutions: Vec::new(),
        plot: None,
    };
    let (a, b) = (form.a, form.b);
    match solve_linear(a, b) {
        LinearSolution::Root(x) => {
            output.lines.push(format!("The solution is: x = {:?}", x));
            output.solutions.push(Complex64::new(x, 0.0));
            let title = format!("{:?}x + {:?} = 0", a, b);
            output.plot = Some(PlotModel::build(&[b, a], &output.solutions, &title)?);
        }
        LinearSolution::NoSolution => {
            output.lines.push(ZERO_A_MESSAGE.to_string());
        }
    }
    Ok(output)
}

fn render_polynomial(form: &FormState, method: RootMethod) -> Result<RenderOutput, String> {
    // the degree field has min_value = 1
    let degree = form.degree.max(1) as usize;
    let coefficients = collect_coefficients(degree, &form.coefficients);

    let finder = method.finder();
    let (polynomial, solutions) = solve_polynomial_with(&coefficients, finder.as_ref());
    let equation = format!("{} = 0", polynomial);

    let lines = vec![
        format!("The polynomial is: {}", equation),
        format!(
            "The solutions are: [{}]",
            solutions.iter().map(format_root).join(", ")
        ),
    ];
    let plot = PlotModel::build(&coefficients, &solutions, &equation)?;
    Ok(RenderOutput {
        title: APP_TITLE.to_string(),
        subheader: POLYNOMIAL_SUBHEADER.to_string(),
        lines,
        solutions,
        plot: Some(plot),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polynomial_form(degree: i64, coefficients: Vec<f64>) -> FormState {
        FormState {
            kind: EquationKind::Polynomial,
            degree,
            coefficients,
            ..FormState::default()
        }
    }

    #[test]
    fn test_collect_coefficients_reverses() {
        // x^2 - 4 typed as 1, 0, -4
        assert_eq!(collect_coefficients(2, &[1.0, 0.0, -4.0]), vec![-4.0, 0.0, 1.0]);
        // missing entries default to zero, extra ones are dropped
        assert_eq!(collect_coefficients(2, &[3.0]), vec![0.0, 0.0, 3.0]);
        assert_eq!(collect_coefficients(1, &[1.0, 2.0, 9.0]), vec![2.0, 1.0]);
    }

    #[test]
    fn test_collecting_descending_equals_ascending_input() {
        let ascending = vec![0.5, -1.0, 0.0, 2.0];
        let mut descending = ascending.clone();
        descending.reverse();
        assert_eq!(collect_coefficients(3, &descending), ascending);
    }

    #[test]
    fn test_format_root() {
        assert_eq!(format_root(&Complex64::new(2.0, 0.0)), "2");
        assert_eq!(format_root(&Complex64::new(-0.5, 0.0)), "-0.5");
        assert_eq!(format_root(&Complex64::new(0.0, 1.0)), "i");
        assert_eq!(format_root(&Complex64::new(0.0, -1.0)), "-i");
        assert_eq!(format_root(&Complex64::new(0.0, 2.5)), "2.5i");
        assert_eq!(format_root(&Complex64::new(-1.0, -2.0)), "-1 - 2i");
        assert_eq!(format_root(&Complex64::new(0.5, 1.0)), "0.5 + i");
    }

    #[test]
    fn test_default_form_is_linear_x_equals_zero() {
        let output = render(&FormState::default(), RootMethod::default()).unwrap();
        assert_eq!(output.title, APP_TITLE);
        assert_eq!(output.subheader, LINEAR_SUBHEADER);
        assert_eq!(output.lines, vec!["The solution is: x = -0.0".to_string()]);
        let plot = output.plot.unwrap();
        assert_eq!(plot.title, "Graph of 1.0x + 0.0 = 0");
        assert_eq!(plot.markers.len(), 1);
        assert_eq!(plot.markers[0].label, "Root: -0.00");
    }

    #[test]
    fn test_linear_render() {
        let form = FormState { a: 2.0, b: -4.0, ..FormState::default() };
        let output = render(&form, RootMethod::default()).unwrap();
        assert_eq!(output.lines, vec!["The solution is: x = 2.0".to_string()]);
        assert_eq!(output.solutions, vec![Complex64::new(2.0, 0.0)]);
        let plot = output.plot.unwrap();
        assert_eq!(plot.legend, "2.0x + -4.0 = 0");
        // plotted with coefficients [b, a]
        assert_eq!(plot.y[0], 2.0 * -10.0 - 4.0);
    }

    #[test]
    fn test_linear_zero_a_skips_plot() {
        let form = FormState { a: 0.0, b: 5.0, ..FormState::default() };
        let output = render(&form, RootMethod::default()).unwrap();
        assert_eq!(output.lines, vec![ZERO_A_MESSAGE.to_string()]);
        assert!(output.plot.is_none());
        assert!(output.solutions.is_empty());
    }

    #[test]
    fn test_polynomial_render() {
        let form = polynomial_form(2, vec![1.0, 0.0, -4.0]);
        let output = render(&form, RootMethod::Companion).unwrap();
        assert_eq!(output.subheader, POLYNOMIAL_SUBHEADER);
        assert_eq!(
            output.lines,
            vec![
                "The polynomial is: x^2 - 4 = 0".to_string(),
                "The solutions are: [-2, 2]".to_string()
            ]
        );
        let plot = output.plot.unwrap();
        assert_eq!(plot.title, "Graph of x^2 - 4 = 0");
        assert_eq!(plot.markers.len(), 2);
    }

    #[test]
    fn test_polynomial_complex_roots_listed_but_not_marked() {
        let form = polynomial_form(2, vec![1.0, 0.0, 1.0]);
        for method in [RootMethod::Companion, RootMethod::DurandKerner] {
            let output = render(&form, method).unwrap();
            assert_eq!(output.lines[1], "The solutions are: [-i, i]");
            assert!(output.plot.unwrap().markers.is_empty());
        }
    }

    #[test]
    fn test_polynomial_default_fields() {
        // degree 2 and every coefficient left at 0.0
        let output = render(&polynomial_form(2, vec![]), RootMethod::default()).unwrap();
        assert_eq!(output.lines[0], "The polynomial is: 0 = 0");
        assert_eq!(output.lines[1], "The solutions are: []");
        assert!(output.plot.is_some());
    }

    #[test]
    fn test_polynomial_degree_is_clamped() {
        let output = render(&polynomial_form(0, vec![1.0, 0.0]), RootMethod::default()).unwrap();
        assert_eq!(output.lines[0], "The polynomial is: x = 0");
        assert_eq!(output.lines[1], "The solutions are: [0]");
    }

    #[test]
    fn test_triple_root_is_marked() {
        // (x - 2)^3
        let form = polynomial_form(3, vec![1.0, -6.0, 12.0, -8.0]);
        for method in [RootMethod::Companion, RootMethod::DurandKerner] {
            let output = render(&form, method).unwrap();
            assert_eq!(output.lines[0], "The polynomial is: x^3 - 6*x^2 + 12*x - 8 = 0");
            assert_eq!(output.lines[1], "The solutions are: [2, 2, 2]");
            assert!(output.solutions.iter().all(|r| r.im == 0.0));
            let plot = output.plot.unwrap();
            assert_eq!(plot.markers.len(), 1, "method {}", method);
            assert_eq!(plot.markers[0].label, "Root: 2.00");
        }
    }

    #[test]
    fn test_two_double_roots_are_marked() {
        // (x^2 - 1)^2
        let form = polynomial_form(4, vec![1.0, 0.0, -2.0, 0.0, 1.0]);
        for method in [RootMethod::Companion, RootMethod::DurandKerner] {
            let output = render(&form, method).unwrap();
            assert_eq!(output.lines[1], "The solutions are: [-1, -1, 1, 1]");
            let labels: Vec<String> = output
                .plot
                .unwrap()
                .markers
                .into_iter()
                .map(|m| m.label)
                .collect();
            assert_eq!(labels, vec!["Root: -1.00", "Root: 1.00"], "method {}", method);
        }
    }

    #[test]
    fn test_render_is_repeatable() {
        let form = polynomial_form(3, vec![1.0, -6.0, 11.0, -6.0]);
        let first = render(&form, RootMethod::default()).unwrap();
        let second = render(&form, RootMethod::default()).unwrap();
        assert_eq!(first.lines, second.lines);
        assert_eq!(first.lines[1], "The solutions are: [1, 2, 3]");
    }

    #[test]
    fn test_equation_kind_parsing() {
        assert_eq!("linear".parse::<EquationKind>().unwrap(), EquationKind::Linear);
        assert_eq!(
            "POLYNOMIAL".parse::<EquationKind>().unwrap(),
            EquationKind::Polynomial
        );
        assert!("quadratic".parse::<EquationKind>().is_err());
        assert_eq!(EquationKind::Polynomial.to_string(), "Polynomial");
    }
}
