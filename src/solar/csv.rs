use serde::Deserialize;

use super::error::SolarError;
use super::series::SolarSeries;

/// A row of the expected upload format. Unknown extra columns are ignored.
#[derive(Debug, Deserialize)]
struct Row {
    #[serde(default)]
    date: String,
    #[serde(default)]
    production: String,
}

/// Builds a series from CSV content with a header row. Missing or
/// unparseable production values coerce to 0; zero data rows reject the
/// whole upload.
pub fn parse_series(content: &str) -> Result<SolarSeries, SolarError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut labels = Vec::new();
    let mut values = Vec::new();
    for row in reader.deserialize::<Row>() {
        let row = row?;
        labels.push(row.date);
        values.push(row.production.parse::<f64>().unwrap_or(0.0));
    }

    let series = SolarSeries { labels, values };
    if series.is_empty() {
        return Err(SolarError::EmptyDataset);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label_and_value_columns() {
        let series = parse_series("date,production\n2026-01-01,5.5\n2026-01-02,7\n").unwrap();
        assert_eq!(series.labels, vec!["2026-01-01", "2026-01-02"]);
        assert_eq!(series.values, vec![5.5, 7.0]);
    }

    #[test]
    fn unparseable_production_coerces_to_zero() {
        // Bad numerics become 0 rather than failing the upload.
        let series = parse_series("date,production\nd1,5\nd2,bad\n").unwrap();
        assert_eq!(series.labels, vec!["d1", "d2"]);
        assert_eq!(series.values, vec![5.0, 0.0]);
    }

    #[test]
    fn missing_production_column_coerces_to_zero() {
        let series = parse_series("date,production\nd1,\nd2\n").unwrap();
        assert_eq!(series.values, vec![0.0, 0.0]);
    }

    #[test]
    fn header_only_is_an_empty_dataset() {
        assert!(matches!(
            parse_series("date,production\n"),
            Err(SolarError::EmptyDataset)
        ));
        assert!(matches!(parse_series(""), Err(SolarError::EmptyDataset)));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let series =
            parse_series("date,production,site\nd1,4.2,roof\n").unwrap();
        assert_eq!(series.labels, vec!["d1"]);
        assert_eq!(series.values, vec![4.2]);
    }
}
