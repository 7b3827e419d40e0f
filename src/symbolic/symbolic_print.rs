//! human-readable rendering of symbolic expressions: `x^2 - 2.5*x + 1.5`,
//! also used by `Display` for `Expr`.
use crate::symbolic::symbolic_engine::Expr;

// binding strength of the top-level operator of a printed expression
const PREC_SUM: u8 = 1;
const PREC_PRODUCT: u8 = 2;
const PREC_POWER: u8 = 3;
const PREC_ATOM: u8 = 4;

/// Formats a number without a trailing ".0" for integral values and without "-0".
pub fn format_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

fn wrap(s: String, needs_brackets: bool) -> String {
    if needs_brackets {
        format!("({})", s)
    } else {
        s
    }
}

impl Expr {
    /// Pretty string with the fewest brackets that keep the meaning.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let p = Expr::polynomial(&[1.5, -2.5, 1.0], "x");
    /// assert_eq!(p.pretty(), "x^2 - 2.5*x + 1.5");
    /// ```
    pub fn pretty(&self) -> String {
        self.pretty_prec().0
    }

    fn pretty_prec(&self) -> (String, u8) {
        match self {
            Expr::Var(name) => (name.clone(), PREC_ATOM),
            Expr::Const(val) => {
                let s = format_number(*val);
                // a negative number behaves like a unary minus
                let prec = if s.starts_with('-') { PREC_PRODUCT } else { PREC_ATOM };
                (s, prec)
            }
            Expr::Add(lhs, rhs) => {
                let (l, _) = lhs.pretty_prec();
                let (r, _) = rhs.pretty_prec();
                match r.strip_prefix('-') {
                    Some(stripped) => (format!("{} - {}", l, stripped), PREC_SUM),
                    None => (format!("{} + {}", l, r), PREC_SUM),
                }
            }
            Expr::Sub(lhs, rhs) => {
                let (l, _) = lhs.pretty_prec();
                let (r, r_prec) = rhs.pretty_prec();
                let needs = r_prec <= PREC_SUM || r.starts_with('-');
                (format!("{} - {}", l, wrap(r, needs)), PREC_SUM)
            }
            Expr::Mul(lhs, rhs) if **lhs == Expr::Const(-1.0) => {
                let (r, r_prec) = rhs.pretty_prec();
                let needs = r_prec < PREC_PRODUCT || r.starts_with('-');
                (format!("-{}", wrap(r, needs)), PREC_PRODUCT)
            }
            Expr::Mul(lhs, rhs) => {
                let (l, l_prec) = lhs.pretty_prec();
                let (r, r_prec) = rhs.pretty_prec();
                let r_needs = r_prec < PREC_PRODUCT || r.starts_with('-');
                (
                    format!("{}*{}", wrap(l, l_prec < PREC_PRODUCT), wrap(r, r_needs)),
                    PREC_PRODUCT,
                )
            }
            Expr::Div(lhs, rhs) => {
                let (l, l_prec) = lhs.pretty_prec();
                let (r, r_prec) = rhs.pretty_prec();
                (
                    format!(
                        "{}/{}",
                        wrap(l, l_prec < PREC_PRODUCT),
                        wrap(r, r_prec <= PREC_PRODUCT)
                    ),
                    PREC_PRODUCT,
                )
            }
            Expr::Pow(base, exp) => {
                let (b, b_prec) = base.pretty_prec();
                let (e, e_prec) = exp.pretty_prec();
                (
                    format!("{}^{}", wrap(b, b_prec < PREC_ATOM), wrap(e, e_prec < PREC_ATOM)),
                    PREC_POWER,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Expr {
        Expr::Var("x".to_string())
    }

    #[test]
    fn test_pretty_polynomials() {
        assert_eq!(Expr::polynomial(&[-4.0, 0.0, 1.0], "x").pretty(), "x^2 - 4");
        assert_eq!(Expr::polynomial(&[1.0, 0.0, 1.0], "x").pretty(), "x^2 + 1");
        assert_eq!(Expr::polynomial(&[0.0, 1.0], "x").pretty(), "x");
        assert_eq!(
            Expr::polynomial(&[1.5, -2.5, 1.0], "x").pretty(),
            "x^2 - 2.5*x + 1.5"
        );
        assert_eq!(Expr::polynomial(&[1.0, 0.0, -1.0], "x").pretty(), "-x^2 + 1");
        assert_eq!(Expr::polynomial(&[0.0, 0.0, 0.0], "x").pretty(), "0");
        assert_eq!(
            Expr::polynomial(&[-6.0, 11.0, -6.0, 1.0], "x").pretty(),
            "x^3 - 6*x^2 + 11*x - 6"
        );
    }

    #[test]
    fn test_pretty_brackets() {
        let sum = x() + Expr::Const(1.0);
        assert_eq!((sum.clone() * x()).pretty(), "(x + 1)*x");
        assert_eq!((x() - sum.clone()).pretty(), "x - (x + 1)");
        assert_eq!(sum.clone().pow(Expr::Const(2.0)).pretty(), "(x + 1)^2");
        assert_eq!((x() / (x() * x())).pretty(), "x/(x*x)");
        assert_eq!(Expr::Const(-2.0).pow(x()).pretty(), "(-2)^x");
        assert_eq!((x() + Expr::Const(-3.0)).pretty(), "x - 3");
        assert_eq!((x() - Expr::Const(-3.0)).pretty(), "x - (-3)");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
    }
}
