use crate::Utils::plots::PlotModel;
use csv::Writer;
use log::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// sampled curve as a tab separated table: header "x\tf(x)" then one row per sample
pub fn save_curve_to_file(model: &PlotModel, filename: &Path) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "{}\t{}", model.x_desc, model.y_desc)?;
    for (x, y) in model.x.iter().zip(model.y.iter()) {
        writeln!(file, "{}\t{}", x, y)?;
    }
    info!("curve saved to {}", filename.display());
    Ok(())
}

/// sampled curve as csv: header "x,f(x)" then one row per sample
pub fn save_curve_to_csv(model: &PlotModel, filename: &Path) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record([model.x_desc.as_str(), model.y_desc.as_str()])?;
    for (x, y) in model.x.iter().zip(model.y.iter()) {
        writer.write_record([x.to_string(), y.to_string()])?;
    }

    writer.flush()?;
    info!("curve saved to {}", filename.display());
    Ok(())
}

/// Exports the sampled curve. `.txt` and `.dat` files get the tab separated table,
/// anything else is written as csv.
pub fn save_curve(model: &PlotModel, filename: &Path) -> io::Result<()> {
    let tab_separated = filename
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt") || ext.eq_ignore_ascii_case("dat"));
    if tab_separated {
        save_curve_to_file(model, filename)
    } else {
        save_curve_to_csv(model, filename)
    }
}
