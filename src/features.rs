use serde::Serialize;
use utoipa::ToSchema;

/// Which page section is visible. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feature {
    None,
    Tracking,
    Solar,
    Placeholder { title: String },
}

impl Feature {
    /// Routes a requested section name. Unknown names land on a placeholder
    /// titled after the request.
    pub fn from_request(name: &str) -> Self {
        match name {
            "tracking" => Feature::Tracking,
            "solar" => Feature::Solar,
            other => Feature::Placeholder {
                title: placeholder_title(other),
            },
        }
    }
}

/// Upper-cases the section name and replaces separators with spaces.
pub fn placeholder_title(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sections_route_directly() {
        assert_eq!(Feature::from_request("tracking"), Feature::Tracking);
        assert_eq!(Feature::from_request("solar"), Feature::Solar);
    }

    #[test]
    fn unknown_sections_fall_back_to_placeholder() {
        assert_eq!(
            Feature::from_request("weather-alerts"),
            Feature::Placeholder {
                title: "WEATHER ALERTS".to_string()
            }
        );
    }

    #[test]
    fn placeholder_title_folds_all_separators() {
        assert_eq!(placeholder_title("space-weather_report"), "SPACE WEATHER REPORT");
        assert_eq!(placeholder_title("news"), "NEWS");
    }
}
