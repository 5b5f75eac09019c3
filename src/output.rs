// src/output.rs
use ndarray::ArrayView2;
use std::fs::File;
use std::io::{self, Write};

/// Build the output path for a run's price-path CSV
///
/// Embeds the period count and both vol percentages so distinct runs do not
/// collide: `<dir>/sim_{periods}_IV_{implied}_RealVol_{realized}.csv`.
pub fn csv_filename(
    dir: &str,
    num_periods: usize,
    implied_vol_pct: u64,
    realized_vol_pct: u64,
) -> String {
    format!(
        "{}/sim_{}_IV_{}_RealVol_{}.csv",
        dir, num_periods, implied_vol_pct, realized_vol_pct
    )
}

/// Write the pre-expiry price paths to a CSV file
///
/// One row per path, `num_periods` comma-separated spot values (columns
/// `0..num_periods` of the path matrix; the terminal value is omitted).
/// The target directory must already exist.
pub fn write_paths_to_csv(
    filename: &str,
    paths: ArrayView2<f64>,
    num_periods: usize,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for row in paths.outer_iter() {
        let mut first = true;
        for &s in row.iter().take(num_periods) {
            if first {
                write!(file, "{}", s)?;
                first = false;
            } else {
                write!(file, ",{}", s)?;
            }
        }
        writeln!(file)?;
    }
    Ok(())
}
