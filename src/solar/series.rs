use serde::Serialize;
use utoipa::ToSchema;

/// Index-aligned chart data: `labels.len() == values.len()` always.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SolarSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl SolarSeries {
    /// The fixed seven-day demonstration dataset shown before any upload.
    pub fn demo() -> Self {
        Self {
            labels: ["Day -6", "Day -5", "Day -4", "Day -3", "Day -2", "Day -1", "Today"]
                .map(String::from)
                .to_vec(),
            values: vec![18.0, 20.0, 22.0, 19.0, 21.0, 23.0, 24.0],
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_series_is_aligned() {
        let series = SolarSeries::demo();
        assert_eq!(series.labels.len(), series.values.len());
        assert_eq!(series.len(), 7);
        assert_eq!(series.values[0], 18.0);
    }
}
