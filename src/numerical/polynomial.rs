use crate::symbolic::symbolic_engine::Expr;
use num_complex::Complex64;

/// Single variable polynomial with real coefficients, index = power.
///
/// The coefficient list is stored exactly as entered, a zero leading
/// coefficient included.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Self {
        Polynomial { coeffs }
    }

    /// from coefficients listed highest power first, as a person reads the equation
    pub fn from_descending(mut coeffs: Vec<f64>) -> Self {
        coeffs.reverse();
        Polynomial { coeffs }
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<f64> {
        self.coeffs
    }

    /// nominal degree: length of the coefficient list minus one
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// degree after dropping zero coefficients of the highest powers;
    /// None for the zero polynomial
    pub fn effective_degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|&c| c != 0.0)
    }

    /// the same polynomial without zero coefficients of the highest powers
    pub fn trimmed(&self) -> Polynomial {
        let len = self.effective_degree().map_or(0, |d| d + 1);
        Polynomial::new(self.coeffs[..len].to_vec())
    }

    pub fn is_zero(&self) -> bool {
        self.effective_degree().is_none()
    }

    /// Horner evaluation at a real point
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Horner evaluation at a complex point
    pub fn eval_complex(&self, z: Complex64) -> Complex64 {
        self.coeffs
            .iter()
            .rev()
            .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
    }

    pub fn derivative(&self) -> Polynomial {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, &c)| c * power as f64)
            .collect();
        Polynomial::new(coeffs)
    }

    /// derivative taken `n` times, `n = 0` gives a copy
    pub fn nth_derivative(&self, n: usize) -> Polynomial {
        (0..n).fold(self.clone(), |p, _| p.derivative())
    }

    /// Horner evaluation of sum |c_i| * r^i: the size of the terms of p at |z| = r,
    /// against which rounding in `eval_complex` is measured
    pub fn magnitude_bound(&self, r: f64) -> f64 {
        Polynomial::new(self.coeffs.iter().map(|c| c.abs()).collect()).eval(r)
    }

    /// symbolic form in the variable `var_name`
    pub fn to_expr(&self, var_name: &str) -> Expr {
        Expr::polynomial(&self.coeffs, var_name)
    }
}
