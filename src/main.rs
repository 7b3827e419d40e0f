#![allow(non_snake_case)]
use RustedEquations::Utils::log_setup::{init_logger, parse_log_level};
use RustedEquations::Utils::logger::save_curve;
use RustedEquations::Utils::plots::plot_equation;
use RustedEquations::Utils::roots_table::roots_table;
use RustedEquations::app::task_config::{ConfigOverrides, TaskConfig};
use RustedEquations::app::{EquationKind, render};
use RustedEquations::numerical::polynomial_roots::RootMethod;
use anyhow::Context;
use clap::{ArgAction, Parser};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "rusted_equations",
    about = "Equation Solver and Visualizer: solve ax + b = 0 or a polynomial equation and plot it",
    version
)]
struct EquationsCli {
    /// Task document with equation/solver/output/logging sections
    #[arg(long = "task", value_name = "FILE")]
    task: Option<PathBuf>,

    /// linear | polynomial
    #[arg(long = "kind", value_name = "KIND")]
    kind: Option<EquationKind>,

    /// coefficient a of ax + b = 0
    #[arg(short = 'a', long = "a", allow_negative_numbers = true)]
    a: Option<f64>,

    /// coefficient b of ax + b = 0
    #[arg(short = 'b', long = "b", allow_negative_numbers = true)]
    b: Option<f64>,

    /// degree of the polynomial (at least 1)
    #[arg(long = "degree", value_name = "N", allow_negative_numbers = true)]
    degree: Option<i64>,

    /// polynomial coefficients from x^degree down to x^0, e.g. --coeff 1,0,-4
    #[arg(
        long = "coeff",
        value_name = "C",
        value_delimiter = ',',
        num_args = 1..,
        allow_negative_numbers = true
    )]
    coeff: Vec<f64>,

    /// companion | durand_kerner
    #[arg(long = "method", value_name = "METHOD")]
    method: Option<RootMethod>,

    /// plot file, .svg gives an SVG and anything else a PNG [default: equation.png]
    #[arg(long = "plot", value_name = "FILE")]
    plot: Option<PathBuf>,

    /// also export the sampled curve: .txt or .dat gives a tab separated table, anything else CSV
    #[arg(long = "csv", value_name = "FILE")]
    csv: Option<PathBuf>,

    /// off | error | warn | info | debug
    #[arg(long = "loglevel", value_name = "LEVEL")]
    loglevel: Option<String>,

    /// also write the log into log_<date>.txt
    #[arg(long = "logfile", action = ArgAction::SetTrue)]
    logfile: bool,
}

impl EquationsCli {
    fn overrides(&self) -> anyhow::Result<ConfigOverrides> {
        let loglevel = match &self.loglevel {
            Some(level) => Some(parse_log_level(level).map_err(anyhow::Error::msg)?),
            None => None,
        };
        Ok(ConfigOverrides {
            kind: self.kind,
            a: self.a,
            b: self.b,
            degree: self.degree,
            coefficients: (!self.coeff.is_empty()).then(|| self.coeff.clone()),
            method: self.method,
            plot_path: self.plot.clone(),
            csv_path: self.csv.clone(),
            loglevel,
            logfile: self.logfile,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = EquationsCli::parse();

    let mut config = match &cli.task {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read task file {}", path.display()))?;
            TaskConfig::from_document(&text)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid task file {}", path.display()))?
        }
        None => TaskConfig::default(),
    };
    config.apply_overrides(cli.overrides()?);

    if let Some(log_name) = init_logger(config.loglevel, config.logfile) {
        info!("writing log to {}", log_name);
    }
    info!("running with {:?}", config);

    let output = render(&config.form, config.method).map_err(anyhow::Error::msg)?;
    println!("{}", output.title);
    println!("{}", output.subheader);
    for line in &output.lines {
        println!("{}", line);
    }

    let Some(model) = &output.plot else {
        if config.csv_path.is_some() {
            warn!("no curve to export, CSV file not written");
        }
        return Ok(());
    };
    println!("{}", roots_table(&output.solutions));

    plot_equation(model, &config.plot_path).map_err(anyhow::Error::msg)?;
    println!("plot saved to {}", config.plot_path.display());
    if let Some(csv_path) = &config.csv_path {
        save_curve(model, csv_path)
            .with_context(|| format!("failed to write {}", csv_path.display()))?;
        println!("curve saved to {}", csv_path.display());
    }
    Ok(())
}
