//! Turns a task document into the form values and output settings of one run.
//!
//! ```text
//! equation
//! kind: polynomial
//! degree: 2
//! coefficients: 1.0, 0.0, -4.0
//! solver
//! method: durand_kerner
//! output
//! plot: roots.svg
//! csv: curve.csv
//! logging
//! loglevel: debug
//! logfile: false
//! ```
//! Every section and key may be left out; what is missing keeps its default value.
//! Values given on the command line are applied on top with [`TaskConfig::apply_overrides`].
use crate::Utils::log_setup::parse_log_level;
use crate::Utils::task_parser::{DocumentMap, SectionMap, Value, parse_document_as};
use crate::app::{EquationKind, FormState};
use crate::numerical::polynomial_roots::RootMethod;
use log::{LevelFilter, warn};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PLOT_PATH: &str = "equation.png";

const TEMPLATE: &[(&str, &[&str])] = &[
    ("equation", &["kind", "degree", "coefficients", "a", "b"]),
    ("solver", &["method"]),
    ("output", &["plot", "csv"]),
    ("logging", &["loglevel", "logfile"]),
];

#[derive(Debug, Clone, PartialEq)]
pub struct TaskConfig {
    pub form: FormState,
    pub method: RootMethod,
    pub plot_path: PathBuf,
    pub csv_path: Option<PathBuf>,
    pub loglevel: LevelFilter,
    pub logfile: bool,
}

impl Default for TaskConfig {
    fn default() -> Self {
        TaskConfig {
            form: FormState::default(),
            method: RootMethod::default(),
            plot_path: PathBuf::from(DEFAULT_PLOT_PATH),
            csv_path: None,
            loglevel: LevelFilter::Info,
            logfile: false,
        }
    }
}

/// values from the command line; `None` leaves the current value alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub kind: Option<EquationKind>,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub degree: Option<i64>,
    pub coefficients: Option<Vec<f64>>,
    pub method: Option<RootMethod>,
    pub plot_path: Option<PathBuf>,
    pub csv_path: Option<PathBuf>,
    pub loglevel: Option<LevelFilter>,
    pub logfile: bool,
}

/// all titles and keys the task document knows, every value None
pub fn task_template() -> DocumentMap {
    let mut template: DocumentMap = HashMap::new();
    for (title, keys) in TEMPLATE {
        let section: SectionMap = keys.iter().map(|key| (key.to_string(), None)).collect();
        template.insert(title.to_string(), section);
    }
    template
}

fn known_key(title: &str, key: &str) -> bool {
    TEMPLATE
        .iter()
        .any(|(t, keys)| *t == title && keys.contains(&key))
}

/// the single value of `title.key`, if present
fn single_value<'a>(doc: &'a DocumentMap, title: &str, key: &str) -> Result<Option<&'a Value>, String> {
    match doc.get(title).and_then(|section| section.get(key)) {
        Some(Some(values)) => match values.as_slice() {
            [value] => Ok(Some(value)),
            _ => Err(format!(
                "{}.{} expects a single value, got {}",
                title,
                key,
                values.len()
            )),
        },
        _ => Ok(None),
    }
}

fn float_value(doc: &DocumentMap, title: &str, key: &str) -> Result<Option<f64>, String> {
    match single_value(doc, title, key)? {
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| format!("{}.{} must be a number, got '{}'", title, key, value)),
        None => Ok(None),
    }
}

fn parsed_value<T: FromStr>(doc: &DocumentMap, title: &str, key: &str) -> Result<Option<T>, String> {
    match single_value(doc, title, key)? {
        Some(value) => {
            let text = value.to_string();
            text.parse::<T>()
                .map(Some)
                .map_err(|_| format!("unknown {}.{}: '{}'", title, key, text))
        }
        None => Ok(None),
    }
}

impl TaskConfig {
    /// Parses the task document and fills a config from it, defaults where it is silent.
    pub fn from_document(input: &str) -> Result<TaskConfig, String> {
        let template = task_template();
        let doc = parse_document_as(input, Some(&template))?;
        for (title, section) in &doc {
            for key in section.keys() {
                if !known_key(title, key) {
                    warn!("ignoring unknown task field {}.{}", title, key);
                }
            }
        }

        let mut config = TaskConfig::default();
        if let Some(kind) = parsed_value::<EquationKind>(&doc, "equation", "kind")? {
            config.form.kind = kind;
        }
        if let Some(a) = float_value(&doc, "equation", "a")? {
            config.form.a = a;
        }
        if let Some(b) = float_value(&doc, "equation", "b")? {
            config.form.b = b;
        }
        if let Some(value) = single_value(&doc, "equation", "degree")? {
            config.form.degree = value
                .as_integer()
                .ok_or_else(|| format!("equation.degree must be an integer, got '{}'", value))?;
        }
        if let Some(Some(values)) = doc.get("equation").and_then(|s| s.get("coefficients")) {
            config.form.coefficients = values
                .iter()
                .map(|value| {
                    value.as_f64().ok_or_else(|| {
                        format!("equation.coefficients must be numbers, got '{}'", value)
                    })
                })
                .collect::<Result<Vec<f64>, String>>()?;
        }
        if let Some(method) = parsed_value::<RootMethod>(&doc, "solver", "method")? {
            config.method = method;
        }
        if let Some(plot) = single_value(&doc, "output", "plot")? {
            config.plot_path = PathBuf::from(plot.to_string());
        }
        if let Some(csv) = single_value(&doc, "output", "csv")? {
            config.csv_path = Some(PathBuf::from(csv.to_string()));
        }
        if let Some(level) = single_value(&doc, "logging", "loglevel")? {
            config.loglevel = parse_log_level(&level.to_string())?;
        }
        if let Some(value) = single_value(&doc, "logging", "logfile")? {
            config.logfile = value
                .as_boolean()
                .ok_or_else(|| format!("logging.logfile must be true or false, got '{}'", value))?;
        }
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(kind) = overrides.kind {
            self.form.kind = kind;
        }
        if let Some(a) = overrides.a {
            self.form.a = a;
        }
        if let Some(b) = overrides.b {
            self.form.b = b;
        }
        if let Some(degree) = overrides.degree {
            self.form.degree = degree;
        }
        if let Some(coefficients) = overrides.coefficients {
            self.form.coefficients = coefficients;
        }
        if let Some(method) = overrides.method {
            self.method = method;
        }
        if let Some(plot_path) = overrides.plot_path {
            self.plot_path = plot_path;
        }
        if overrides.csv_path.is_some() {
            self.csv_path = overrides.csv_path;
        }
        if let Some(level) = overrides.loglevel {
            self.loglevel = level;
        }
        self.logfile |= overrides.logfile;
    }
}
