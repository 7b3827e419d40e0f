#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) builds a symbolic polynomial from a list of numeric coefficients
/// 2) turns a symbolic expression into a Rust function
/// 3) turns a symbolic expression into a string for printing and control results
///# Example#
/// ```
/// use RustedEquations::symbolic::symbolic_engine::Expr;
/// // coefficients go from x^0 upwards
/// let polynomial = Expr::polynomial(&[-4.0, 0.0, 1.0], "x");
/// assert_eq!(polynomial.pretty(), "x^2 - 4");
/// // convert symbolic expression to a Rust function and evaluate the function
/// let f = polynomial.lambdify1D().unwrap();
/// assert_eq!(f(3.0), 5.0);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
/// expression -> closure
pub mod symbolic_lambdify;
/// expression -> readable string
pub mod symbolic_print;
