#![allow(non_snake_case)]
///  Linear equation a*x + b = 0 in closed form
/// Example#
/// ```
/// use RustedEquations::numerical::linear_equation::{solve_linear, LinearSolution};
/// assert_eq!(solve_linear(2.0, -4.0), LinearSolution::Root(2.0));
/// assert_eq!(solve_linear(0.0, 1.0), LinearSolution::NoSolution);
/// ```
pub mod linear_equation;
/// polynomial with real coefficients (index = power): evaluation, derivative, symbolic form
pub mod polynomial;
/// all roots of a polynomial: companion matrix eigenvalues or Durand-Kerner iteration
/// Example#
/// ```
/// use RustedEquations::numerical::polynomial_roots::{find_all_roots, RootMethod};
/// // x^2 + 1 = 0
/// let roots = find_all_roots(&[1.0, 0.0, 1.0], RootMethod::DurandKerner.finder().as_ref());
/// assert_eq!(roots.len(), 2);
/// assert!(roots.iter().all(|r| r.im != 0.0));
/// ```
pub mod polynomial_roots;
