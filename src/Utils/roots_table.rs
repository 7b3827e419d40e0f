/*
Pretty printing of a solution set as a table: one row per root with its real part, imaginary part and kind.
*/
use crate::numerical::polynomial_roots::is_real;
use num_complex::Complex64;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, PartialEq, Tabled)]
pub struct RootRow {
    #[tabled(rename = "#")]
    index: usize,
    re: String,
    im: String,
    kind: &'static str,
}

pub fn root_rows(solutions: &[Complex64]) -> Vec<RootRow> {
    solutions
        .iter()
        .enumerate()
        .map(|(i, root)| RootRow {
            index: i + 1,
            re: format!("{:.6}", root.re),
            im: format!("{:.6}", root.im),
            kind: if is_real(root) { "real" } else { "complex" },
        })
        .collect()
}

/// table of the roots, or a one-line note when there are none
pub fn roots_table(solutions: &[Complex64]) -> String {
    if solutions.is_empty() {
        return "no roots".to_string();
    }
    let mut table = Table::new(root_rows(solutions));
    table.with(Style::modern_rounded());
    table.to_string()
}
