//! # Symbolic Engine Module
//!
//! Symbolic expression tree used to represent the equation the user typed in.
//! An equation is never parsed from text here: it is assembled from the
//! coefficient list the form provides, then displayed and turned
//! into a regular Rust closure for plotting.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Variables**: `Var(String)` - symbolic variables like "x"
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//!
//! ### Key Methods
//! - `polynomial(coeffs, var)` - Build c0 + c1*x + ... + cn*x^n from numeric coefficients
//! - `all_arguments_are_variables()` - names of the variables present in the tree
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: Uses Box<Expr> for nested expressions
//!
//! 2. **Operator Overloading**: Implements std::ops traits (Add, Sub, Mul, Div, Neg) for
//!    natural mathematical syntax: `x.clone() * x - Expr::Const(4.0)`
//!
//! 3. **Polynomial Layout**: `polynomial()` emits terms from the highest power down and
//!    drops zero terms, so the tree prints the way a person writes the equation

#![allow(non_camel_case_types)]

use std::fmt;

/// Core symbolic expression enum representing mathematical expressions as an abstract syntax tree.
///
/// # Examples
/// ```rust, ignore
/// use symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "x")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
}

/// The equation the way a person writes it, see `Expr::pretty()`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// Returns the names of all variables in the tree, sorted and without duplicates.
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars.sort();
        vars.dedup();
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<String>) {
        match self {
            Expr::Var(name) => vars.push(name.clone()),
            Expr::Const(_) => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => {
                lhs.collect_variables(vars);
                rhs.collect_variables(vars);
            }
        }
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates power expression self^rhs.
    pub fn pow(mut self, rhs: Expr) -> Expr {
        self = Expr::Pow(self.boxed(), rhs.boxed());
        self
    }

    /// Checks if expression is exactly zero (constant 0.0).
    pub fn is_zero(&self) -> bool {
        match self {
            Expr::Const(val) => val == &0.0,
            _ => false,
        }
    }

    //__________________________________POLYNOMIALS____________________________________

    /// Builds the single variable polynomial c0 + c1*x + ... + cn*x^n from numeric
    /// coefficients (index = power).
    ///
    /// Terms are laid out from the highest power down. Zero coefficients are dropped,
    /// unit coefficients are not written and negative coefficients turn the joining
    /// `Add` into a `Sub`, so `[-4, 0, 1]` becomes `x^2 - 4`.
    /// An empty or all-zero coefficient list gives `Const(0.0)`.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let p = Expr::polynomial(&[-4.0, 0.0, 1.0], "x");
    /// assert_eq!(p.pretty(), "x^2 - 4");
    /// ```
    pub fn polynomial(coeffs: &[f64], var_name: &str) -> Expr {
        let arg_expr = Expr::Var(var_name.to_string());
        let mut eq: Option<Expr> = None;
        for (power, &coeff) in coeffs.iter().enumerate().rev() {
            if coeff == 0.0 {
                continue;
            }
            eq = Some(match eq {
                None => Self::monomial(coeff, power, &arg_expr),
                Some(acc) if coeff < 0.0 => acc - Self::monomial(-coeff, power, &arg_expr),
                Some(acc) => acc + Self::monomial(coeff, power, &arg_expr),
            });
        }
        eq.unwrap_or(Expr::Const(0.0))
    }

    /// coeff * x^power with the trivial factors left out
    fn monomial(coeff: f64, power: usize, arg_expr: &Expr) -> Expr {
        let x_power = match power {
            0 => return Expr::Const(coeff),
            1 => arg_expr.clone(),
            _ => arg_expr.clone().pow(Expr::Const(power as f64)),
        };
        if coeff == 1.0 {
            x_power
        } else if coeff == -1.0 {
            -x_power
        } else {
            Expr::Const(coeff) * x_power
        }
    }
}
