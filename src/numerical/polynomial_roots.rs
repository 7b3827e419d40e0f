//! # Polynomial roots
//!
//! All roots (real and complex) of a polynomial with real coefficients.
//! Root finding sits behind the [`RootFinder`] trait with two numeric methods:
//!
//! 1. [`CompanionMatrix`] - eigenvalues of the companion matrix of the monic polynomial,
//!    computed with the real Schur decomposition from nalgebra. For
//!    p(x) = c0 + c1*x + ... + cn*x^n it is
//! ```text
//! C = [ 0   0   ...  0  -c0/cn     ]
//!     [ 1   0   ...  0  -c1/cn     ]
//!     [ 0   1   ...  0  -c2/cn     ]
//!     [ .   .   ...  .   .         ]
//!     [ 0   0   ...  1  -c(n-1)/cn ]
//! ```
//! 2. [`DurandKerner`] - simultaneous Weierstrass iteration over all roots.
//!
//! Whatever the method, the roots are polished by a few Newton steps on the
//! original polynomial. A root of multiplicity m comes out of either method as a
//! small cloud of m values (spread about eps^(1/m)), often with a spurious imaginary
//! part, so close values are grouped and each group is refined as a simple root of
//! the (m-1)-th derivative, see [`merge_multiple_roots`]. Finally the roots are
//! cleaned (imaginary noise becomes exactly zero, values a hair away from an integer
//! become that integer) and sorted by real part and then by imaginary part.
use crate::numerical::polynomial::Polynomial;
use crate::symbolic::symbolic_engine::Expr;
use log::{debug, info, warn};
use nalgebra::DMatrix;
use nalgebra::linalg::Schur;
use num_complex::Complex64;
use strum_macros::{Display, EnumIter, EnumString};

/// relative size under which an imaginary part is treated as rounding noise
pub const IMAG_TOLERANCE: f64 = 1e-10;
/// relative distance under which a value is snapped to the nearest integer
pub const INTEGER_SNAP_TOLERANCE: f64 = 1e-10;
const NEWTON_POLISH_STEPS: usize = 3;
/// roots closer than this (relative to max(1, |z|)) are taken as one multiple root
pub const MULTIPLE_ROOT_RADIUS: f64 = 1e-3;
/// |p(z)| / sum |c_i| |z|^i a merged multiple root has to reach
pub const MULTIPLE_ROOT_RESIDUAL: f64 = 1e-12;
const MULTIPLE_ROOT_NEWTON_STEPS: usize = 8;

/// capability `solve(polynomial) -> roots`
///
/// Implementations get a polynomial of degree >= 1 with a non-zero leading
/// coefficient and return exactly `degree` roots, multiplicities included.
pub trait RootFinder {
    fn find_roots(&self, poly: &Polynomial) -> Vec<Complex64>;
}

/// Eigenvalues of the companion matrix.
#[derive(Debug, Clone)]
pub struct CompanionMatrix {
    /// Schur decomposition tolerance
    pub eps: f64,
    /// Schur iteration cap, 0 means unbounded
    pub max_iterations: usize,
}

impl Default for CompanionMatrix {
    fn default() -> Self {
        CompanionMatrix {
            eps: f64::EPSILON,
            max_iterations: 10_000,
        }
    }
}

impl CompanionMatrix {
    pub fn companion(poly: &Polynomial) -> DMatrix<f64> {
        let coeffs = poly.coeffs();
        let n = poly.degree();
        let lead = coeffs[n];
        let mut companion = DMatrix::<f64>::zeros(n, n);
        for i in 1..n {
            companion[(i, i - 1)] = 1.0;
        }
        for i in 0..n {
            companion[(i, n - 1)] = -coeffs[i] / lead;
        }
        companion
    }
}

impl RootFinder for CompanionMatrix {
    fn find_roots(&self, poly: &Polynomial) -> Vec<Complex64> {
        let coeffs = poly.coeffs();
        if poly.degree() == 1 {
            return vec![Complex64::new(-coeffs[0] / coeffs[1], 0.0)];
        }
        let companion = Self::companion(poly);
        match Schur::try_new(companion, self.eps, self.max_iterations) {
            Some(schur) => schur.complex_eigenvalues().iter().copied().collect(),
            None => {
                warn!(
                    "Schur decomposition of the companion matrix did not converge in {} iterations, falling back to Durand-Kerner",
                    self.max_iterations
                );
                DurandKerner::default().find_roots(poly)
            }
        }
    }
}

/// Durand-Kerner (Weierstrass) iteration.
#[derive(Debug, Clone)]
pub struct DurandKerner {
    /// stop when no root moves by more than this
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for DurandKerner {
    fn default() -> Self {
        DurandKerner {
            tolerance: 1e-14,
            max_iterations: 500,
        }
    }
}

impl RootFinder for DurandKerner {
    fn find_roots(&self, poly: &Polynomial) -> Vec<Complex64> {
        let n = poly.degree();
        let lead = poly.coeffs()[n];
        let monic = Polynomial::new(poly.coeffs().iter().map(|c| c / lead).collect());
        // the usual non-real, non-unit seed
        let seed = Complex64::new(0.4, 0.9);
        let mut roots: Vec<Complex64> = (0..n).map(|k| seed.powu(k as u32)).collect();

        for iteration in 0..self.max_iterations {
            let mut max_step: f64 = 0.0;
            for k in 0..n {
                let zk = roots[k];
                let denominator = roots
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != k)
                    .fold(Complex64::new(1.0, 0.0), |acc, (_, zj)| acc * (zk - zj));
                if denominator.norm() == 0.0 {
                    continue;
                }
                let step = monic.eval_complex(zk) / denominator;
                roots[k] = zk - step;
                max_step = max_step.max(step.norm());
            }
            if max_step <= self.tolerance {
                debug!("Durand-Kerner converged after {} iterations", iteration + 1);
                return roots;
            }
        }
        warn!(
            "Durand-Kerner did not reach tolerance {} in {} iterations",
            self.tolerance, self.max_iterations
        );
        roots
    }
}

/// Root finding method, selectable by name ("companion", "durand_kerner")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RootMethod {
    #[default]
    Companion,
    DurandKerner,
}

impl RootMethod {
    pub fn finder(&self) -> Box<dyn RootFinder> {
        match self {
            RootMethod::Companion => Box::new(CompanionMatrix::default()),
            RootMethod::DurandKerner => Box::new(DurandKerner::default()),
        }
    }
}

/// a few Newton steps on `poly`; a step is kept only if it lowers |p(z)|
pub fn polish_root(poly: &Polynomial, derivative: &Polynomial, root: Complex64) -> Complex64 {
    let mut z = root;
    let mut residual = poly.eval_complex(z).norm();
    for _ in 0..NEWTON_POLISH_STEPS {
        if residual == 0.0 {
            break;
        }
        let slope = derivative.eval_complex(z);
        if slope.norm() == 0.0 {
            break;
        }
        let candidate = z - poly.eval_complex(z) / slope;
        let candidate_residual = poly.eval_complex(candidate).norm();
        if !candidate_residual.is_finite() || candidate_residual >= residual {
            break;
        }
        z = candidate;
        residual = candidate_residual;
    }
    z
}

fn snap_to_integer(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() <= INTEGER_SNAP_TOLERANCE * value.abs().max(1.0) {
        nearest
    } else {
        value
    }
}

/// drops imaginary noise, snaps near-integers, turns -0 into 0
pub fn clean_root(root: Complex64) -> Complex64 {
    let re = snap_to_integer(root.re);
    let im = if root.im.abs() <= IMAG_TOLERANCE * re.abs().max(1.0) {
        0.0
    } else {
        snap_to_integer(root.im)
    };
    // adding +0 maps -0 to +0
    Complex64::new(re + 0.0, im + 0.0)
}

fn within_radius(a: Complex64, b: Complex64) -> bool {
    (a - b).norm() <= MULTIPLE_ROOT_RADIUS * a.norm().max(1.0)
}

/// Groups roots lying within [`MULTIPLE_ROOT_RADIUS`] of each other and replaces
/// every group that really is a multiple root by that root, repeated once per
/// multiplicity. A group that fails the residual test (two distinct but close
/// roots) is kept as it came.
pub fn merge_multiple_roots(poly: &Polynomial, roots: Vec<Complex64>) -> Vec<Complex64> {
    let mut groups: Vec<Vec<Complex64>> = Vec::new();
    for root in roots {
        match groups.iter_mut().find(|group| within_radius(group[0], root)) {
            Some(group) => group.push(root),
            None => groups.push(vec![root]),
        }
    }

    let mut merged = Vec::new();
    for group in groups {
        let multiplicity = group.len();
        if multiplicity == 1 {
            merged.extend(group);
            continue;
        }
        match refine_multiple_root(poly, &group) {
            Some(root) => {
                debug!("root {} has multiplicity {}", root, multiplicity);
                merged.extend(std::iter::repeat_n(root, multiplicity));
            }
            None => {
                debug!(
                    "{} close roots near {} are kept apart, residual too large",
                    multiplicity, group[0]
                );
                merged.extend(group);
            }
        }
    }
    merged
}

/// Newton on p^(m-1), where a root of multiplicity m of p is a simple root,
/// started from the mean of the group. None if it wanders off or p does not vanish there.
fn refine_multiple_root(poly: &Polynomial, group: &[Complex64]) -> Option<Complex64> {
    let multiplicity = group.len();
    let mean = group.iter().sum::<Complex64>() / multiplicity as f64;
    let target = poly.nth_derivative(multiplicity - 1);
    let slope = target.derivative();

    let mut z = mean;
    for _ in 0..MULTIPLE_ROOT_NEWTON_STEPS {
        let s = slope.eval_complex(z);
        if s.norm() == 0.0 {
            break;
        }
        let step = target.eval_complex(z) / s;
        z -= step;
        if step.norm() <= f64::EPSILON * z.norm().max(1.0) {
            break;
        }
    }
    if !(z.re.is_finite() && z.im.is_finite()) || !within_radius(mean, z) {
        return None;
    }

    let vanishes = |z: Complex64| {
        poly.eval_complex(z).norm() <= MULTIPLE_ROOT_RESIDUAL * poly.magnitude_bound(z.norm())
    };
    // with real coefficients a lone multiple root near the axis is real
    let on_axis = Complex64::new(z.re, 0.0);
    if within_radius(z, on_axis) && vanishes(on_axis) {
        Some(on_axis)
    } else if vanishes(z) {
        Some(z)
    } else {
        None
    }
}

/// sort by real part, then by imaginary part
pub fn sort_roots(roots: &mut [Complex64]) {
    roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
}

pub fn is_real(root: &Complex64) -> bool {
    root.im == 0.0
}

/// Finds every root of the polynomial given by ascending coefficients.
///
/// Zero coefficients of the highest powers are skipped first. A constant
/// (including the zero polynomial) has no roots to report and gives an empty set.
pub fn find_all_roots(coeffs: &[f64], finder: &dyn RootFinder) -> Vec<Complex64> {
    let poly = Polynomial::new(coeffs.to_vec()).trimmed();
    match poly.effective_degree() {
        None | Some(0) => {
            info!("polynomial has no variable part, no roots to find");
            Vec::new()
        }
        Some(_) => {
            let derivative = poly.derivative();
            let polished: Vec<Complex64> = finder
                .find_roots(&poly)
                .into_iter()
                .map(|root| polish_root(&poly, &derivative, root))
                .collect();
            let mut roots: Vec<Complex64> = merge_multiple_roots(&poly, polished)
                .into_iter()
                .map(clean_root)
                .collect();
            sort_roots(&mut roots);
            info!("found {} roots of a degree {} polynomial", roots.len(), poly.degree());
            roots
        }
    }
}

/// Builds the symbolic polynomial from ascending coefficients and finds all of
/// its roots with the default method.
///
/// # Examples
/// ```
/// use RustedEquations::numerical::polynomial_roots::solve_polynomial;
/// let (expr, roots) = solve_polynomial(&[-4.0, 0.0, 1.0]);
/// assert_eq!(expr.pretty(), "x^2 - 4");
/// assert_eq!(roots.len(), 2);
/// ```
pub fn solve_polynomial(coeffs: &[f64]) -> (Expr, Vec<Complex64>) {
    let finder = RootMethod::default().finder();
    solve_polynomial_with(coeffs, finder.as_ref())
}

/// same as `solve_polynomial` with an explicit root finder
pub fn solve_polynomial_with(coeffs: &[f64], finder: &dyn RootFinder) -> (Expr, Vec<Complex64>) {
    let expr = Polynomial::new(coeffs.to_vec()).to_expr("x");
    let roots = find_all_roots(coeffs, finder);
    (expr, roots)
}
