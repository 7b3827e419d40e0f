use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// LAMBDIFICATION - Converting Symbolic Expressions to Executable Functions

    /// Converts a single-variable symbolic expression into an executable Rust closure.
    ///
    /// A constant expression gives a closure that ignores its argument.
    ///
    /// # Returns
    /// Boxed closure that takes f64 input and returns f64 output, or an error if the
    /// expression depends on more than one variable
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::Var("x".to_string());
    /// let f = x.pow(Expr::Const(2.0)); // x^2
    /// let func = f.lambdify1D().unwrap();
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self) -> Result<Box<dyn Fn(f64) -> f64 + Send + Sync>, String> {
        let vars = self.all_arguments_are_variables();
        match vars.len() {
            0 => {
                let compiled_func = self.lambdify_borrowed_thread_safe(&[]);
                Ok(Box::new(move |_| compiled_func(&[])))
            }
            1 => {
                let compiled_func = self.lambdify_borrowed_thread_safe(&[vars[0].as_str()]);
                Ok(Box::new(move |x| compiled_func(&[x])))
            }
            _ => Err(format!(
                "lambdify1D can only be used with expressions containing exactly one variable, found: {:?}",
                vars
            )),
        }
    } // end of lambdify1D

    /// Converts the expression into a closure over a slice of arguments ordered as `vars`.
    /// A variable missing from `vars` evaluates to NaN.
    pub fn lambdify_borrowed_thread_safe(
        &self,
        vars: &[&str],
    ) -> Box<dyn Fn(&[f64]) -> f64 + Send + Sync> {
        match self {
            Expr::Var(name) => match vars.iter().position(|&x| x == name) {
                Some(index) => Box::new(move |args| args[index]),
                None => Box::new(|_| f64::NAN),
            },
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lf = lhs.lambdify_borrowed_thread_safe(vars);
                let rf = rhs.lambdify_borrowed_thread_safe(vars);
                Box::new(move |args| lf(args) + rf(args))
            }
            Expr::Sub(lhs, rhs) => {
                let lf = lhs.lambdify_borrowed_thread_safe(vars);
                let rf = rhs.lambdify_borrowed_thread_safe(vars);
                Box::new(move |args| lf(args) - rf(args))
            }
            Expr::Mul(lhs, rhs) => {
                let lf = lhs.lambdify_borrowed_thread_safe(vars);
                let rf = rhs.lambdify_borrowed_thread_safe(vars);
                Box::new(move |args| lf(args) * rf(args))
            }
            Expr::Div(lhs, rhs) => {
                let lf = lhs.lambdify_borrowed_thread_safe(vars);
                let rf = rhs.lambdify_borrowed_thread_safe(vars);
                Box::new(move |args| lf(args) / rf(args))
            }
            // integer exponents go through powi so negative bases stay exact
            Expr::Pow(b, e) => {
                let bf = b.lambdify_borrowed_thread_safe(vars);
                match e.as_ref() {
                    Expr::Const(n) if n.fract() == 0.0 && n.abs() <= i32::MAX as f64 => {
                        let n = *n as i32;
                        Box::new(move |args| bf(args).powi(n))
                    }
                    _ => {
                        let ef = e.lambdify_borrowed_thread_safe(vars);
                        Box::new(move |args| bf(args).powf(ef(args)))
                    }
                }
            }
        }
    } // end of lambdify
}
