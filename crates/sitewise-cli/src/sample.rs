//! Built-in sample configuration: choosing a solar installation site.

use sitewise_model::{RawCriteriaConfig, ValueRange};

/// Criteria for scoring candidate solar installation sites.
///
/// Distance and cost are negative impact: the smaller the raw value, the
/// better the site.
pub(crate) fn solar_site() -> RawCriteriaConfig {
    RawCriteriaConfig {
        criteria: ["sunlight", "soil", "terrain", "distance", "cost"]
            .map(str::to_owned)
            .to_vec(),
        labels: [
            "Sunlight",
            "Soil quality",
            "Topography quality",
            "Distance from the connection point",
            "Installation cost",
        ]
        .map(str::to_owned)
        .to_vec(),
        range: ValueRange { min: 0.0, max: 10.0 },
        negative_impact: ["distance", "cost"].map(str::to_owned).to_vec(),
        default_weights: [
            ("sunlight", 0.8),
            ("soil", 0.7),
            ("terrain", 0.6),
            ("distance", -0.5),
            ("cost", -0.7),
        ]
        .into_iter()
        .map(|(id, weight)| (id.to_owned(), weight))
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use sitewise_model::Polarity;

    use super::*;

    #[test]
    fn sample_config_validates() {
        let config = solar_site().build().unwrap();
        assert_eq!(config.len(), 5);
        assert_eq!(config.criteria()[0].id(), "sunlight");
        assert_eq!(config.criteria()[0].polarity(), Polarity::Positive);
        assert_eq!(config.criteria()[3].id(), "distance");
        assert_eq!(config.criteria()[3].polarity(), Polarity::Negative);
        assert_eq!(config.criteria()[4].polarity(), Polarity::Negative);
        assert_eq!(config.criteria()[4].default_weight(), -0.7);
    }
}
