mod csv;
mod error;
mod series;

pub use error::SolarError;
pub use series::SolarSeries;

/// The solar feature's chart binding: one series, created once with the demo
/// dataset and replaced wholesale on CSV load.
pub struct SolarPanel {
    series: SolarSeries,
}

impl SolarPanel {
    pub fn new() -> Self {
        Self {
            series: SolarSeries::demo(),
        }
    }

    pub fn series(&self) -> &SolarSeries {
        &self.series
    }

    /// Parses uploaded CSV content and rebinds the chart data. On any error
    /// (including an empty dataset) the previous series stays bound.
    /// Returns the number of rows loaded.
    pub fn load_csv(&mut self, content: &str) -> Result<usize, SolarError> {
        let series = csv::parse_series(content)?;
        let rows = series.len();
        self.series = series;
        log::info!("solar series replaced from CSV ({rows} rows)");
        Ok(rows)
    }
}

impl Default for SolarPanel {
    fn default() -> Self {
        Self::new()
    }
}
