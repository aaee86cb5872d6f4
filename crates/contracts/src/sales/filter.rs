use serde::{Deserialize, Serialize};

/// First year selectable on the year slider.
pub const MIN_YEAR: i32 = 2020;
/// Last year selectable on the year slider.
pub const MAX_YEAR: i32 = 2023;

/// Geographic macro-regions understood by the sales API.
///
/// `Brasil` is the all-regions sentinel: it maps to an empty `regiao`
/// query value instead of a region name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Brasil,
    CentroOeste,
    Nordeste,
    Norte,
    Sudeste,
    Sul,
}

impl Region {
    /// Human-readable label, as shown in the region selector.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Brasil => "Brasil",
            Region::CentroOeste => "Centro-Oeste",
            Region::Nordeste => "Nordeste",
            Region::Norte => "Norte",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
        }
    }

    /// Value sent as the `regiao` query parameter: empty for the
    /// all-regions sentinel, lowercased label otherwise.
    pub fn query_value(&self) -> String {
        match self {
            Region::Brasil => String::new(),
            other => other.label().to_lowercase(),
        }
    }

    /// All regions, in selector order.
    pub fn all() -> Vec<Region> {
        vec![
            Region::Brasil,
            Region::CentroOeste,
            Region::Nordeste,
            Region::Norte,
            Region::Sudeste,
            Region::Sul,
        ]
    }

    /// Parse from a selector label.
    pub fn from_label(label: &str) -> Option<Self> {
        Region::all().into_iter().find(|r| r.label() == label)
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::Brasil
    }
}

/// User-selected filters, rebuilt from widget values on every evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub region: Region,
    /// `None` means "all period data".
    pub year: Option<i32>,
    /// Empty means "all sellers".
    pub sellers: Vec<String>,
}

impl FilterSelection {
    /// Value sent as the `ano` query parameter: empty for all years.
    pub fn year_query_value(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brasil_is_the_all_regions_sentinel() {
        assert_eq!(Region::Brasil.query_value(), "");
        assert_eq!(Region::CentroOeste.query_value(), "centro-oeste");
        assert_eq!(Region::Sudeste.query_value(), "sudeste");
    }

    #[test]
    fn labels_round_trip() {
        for region in Region::all() {
            assert_eq!(Region::from_label(region.label()), Some(region));
        }
        assert_eq!(Region::from_label("Atlântida"), None);
    }

    #[test]
    fn year_query_value_is_empty_for_all_period() {
        let mut selection = FilterSelection::default();
        assert_eq!(selection.year_query_value(), "");
        selection.year = Some(2021);
        assert_eq!(selection.year_query_value(), "2021");
    }
}
