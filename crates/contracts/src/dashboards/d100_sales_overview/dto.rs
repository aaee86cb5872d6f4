use serde::{Deserialize, Serialize};

use crate::sales::{FilterSelection, SalesRecord};

/// Request for the sales overview dashboard.
///
/// The parameter names mirror the upstream sales API (`regiao`, `ano`) so
/// the backend can forward them untouched; `vendedores` is the
/// comma-separated seller subset applied after the fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesOverviewRequest {
    #[serde(default)]
    pub regiao: String,
    #[serde(default)]
    pub ano: String,
    #[serde(default)]
    pub vendedores: String,
}

impl SalesOverviewRequest {
    /// Build the request from the sidebar's filter selection.
    pub fn from_selection(selection: &FilterSelection) -> Self {
        Self {
            regiao: selection.region.query_value(),
            ano: selection.year_query_value(),
            vendedores: selection.sellers.join(","),
        }
    }

    /// Selected sellers; empty when no seller filter is active.
    pub fn seller_set(&self) -> Vec<String> {
        self.vendedores
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Revenue summed per buyer state, with the state's coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRevenue {
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    pub revenue: f64,
}

/// Revenue summed per calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    /// English month name ("January", ...).
    pub month_name: String,
    pub revenue: f64,
}

/// Revenue summed per product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

/// Per-seller revenue and transaction count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerStats {
    pub seller: String,
    pub revenue: f64,
    pub sales_count: u64,
}

/// Full dashboard dataset for one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOverviewResponse {
    /// Summed price of the filtered records.
    pub total_revenue: f64,
    /// Number of filtered records.
    pub total_sales: u64,
    /// Distinct sellers of the fetched data, before the seller filter.
    /// Feeds the sidebar multi-select.
    pub sellers: Vec<String>,
    /// Ordered by revenue descending.
    pub revenue_by_state: Vec<StateRevenue>,
    /// Ordered chronologically, zero-filled between first and last month.
    pub monthly_revenue: Vec<MonthlyRevenue>,
    /// Ordered by revenue descending.
    pub revenue_by_category: Vec<CategoryRevenue>,
    /// Ordered by seller name.
    pub seller_stats: Vec<SellerStats>,
    /// The filtered records, for the raw data table.
    pub records: Vec<SalesRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sales::Region;

    #[test]
    fn request_from_selection_maps_sentinels_to_empty() {
        let selection = FilterSelection::default();
        let request = SalesOverviewRequest::from_selection(&selection);
        assert_eq!(request.regiao, "");
        assert_eq!(request.ano, "");
        assert_eq!(request.vendedores, "");
        assert!(request.seller_set().is_empty());
    }

    #[test]
    fn request_carries_filters() {
        let selection = FilterSelection {
            region: Region::Nordeste,
            year: Some(2022),
            sellers: vec!["Ana Sousa".into(), "Thiago Silva".into()],
        };
        let request = SalesOverviewRequest::from_selection(&selection);
        assert_eq!(request.regiao, "nordeste");
        assert_eq!(request.ano, "2022");
        assert_eq!(
            request.seller_set(),
            vec!["Ana Sousa".to_string(), "Thiago Silva".to_string()]
        );
    }

    #[test]
    fn seller_set_ignores_blank_entries() {
        let request = SalesOverviewRequest {
            vendedores: ", Ana Sousa, ,".into(),
            ..Default::default()
        };
        assert_eq!(request.seller_set(), vec!["Ana Sousa".to_string()]);
    }
}
