use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d100_sales_overview::{
    CategoryRevenue, MonthlyRevenue, SalesOverviewRequest, SalesOverviewResponse, SellerStats,
    StateRevenue,
};
use contracts::sales::SalesRecord;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::shared::sales_api;

/// Get the full dashboard dataset for one evaluation
pub async fn get_sales_overview(request: SalesOverviewRequest) -> Result<SalesOverviewResponse> {
    let records = sales_api::get_client()
        .fetch_products(&request.regiao, &request.ano)
        .await?;

    // Seller options come from the fetched data, before the seller filter.
    let sellers = distinct_sellers(&records);
    let records = apply_seller_filter(records, &request.seller_set());

    Ok(build_overview(records, sellers))
}

/// Assemble the response from the filtered records
fn build_overview(records: Vec<SalesRecord>, sellers: Vec<String>) -> SalesOverviewResponse {
    SalesOverviewResponse {
        total_revenue: records.iter().map(|r| r.price).sum(),
        total_sales: records.len() as u64,
        sellers,
        revenue_by_state: revenue_by_state(&records),
        monthly_revenue: monthly_revenue(&records),
        revenue_by_category: revenue_by_category(&records),
        seller_stats: seller_stats(&records),
        records,
    }
}

/// Distinct sellers of the fetched data, sorted by name
pub fn distinct_sellers(records: &[SalesRecord]) -> Vec<String> {
    let mut sellers: Vec<String> = records.iter().map(|r| r.seller.clone()).collect();
    sellers.sort();
    sellers.dedup();
    sellers
}

/// Keep only records whose seller is in the subset; empty subset keeps all
pub fn apply_seller_filter(records: Vec<SalesRecord>, sellers: &[String]) -> Vec<SalesRecord> {
    if sellers.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| sellers.iter().any(|s| s == &r.seller))
        .collect()
}

/// Revenue per buyer state, descending, with the coordinates of the first
/// record seen for each state
pub fn revenue_by_state(records: &[SalesRecord]) -> Vec<StateRevenue> {
    let mut totals: HashMap<String, StateRevenue> = HashMap::new();

    for record in records {
        let entry = totals
            .entry(record.state.clone())
            .or_insert_with(|| StateRevenue {
                state: record.state.clone(),
                lat: record.lat,
                lon: record.lon,
                revenue: 0.0,
            });
        entry.revenue += record.price;
    }

    let mut rows: Vec<StateRevenue> = totals.into_values().collect();
    // Ties resolved by state name so repeated runs agree.
    rows.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.state.cmp(&b.state))
    });
    rows
}

/// Revenue per calendar month, chronological, with months that saw no
/// sales between the first and last purchase month present at zero
pub fn monthly_revenue(records: &[SalesRecord]) -> Vec<MonthlyRevenue> {
    let mut totals: HashMap<(i32, u32), f64> = HashMap::new();

    for record in records {
        let key = (record.purchase_date.year(), record.purchase_date.month());
        *totals.entry(key).or_insert(0.0) += record.price;
    }

    let (Some(&first), Some(&last)) = (totals.keys().min(), totals.keys().max()) else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    let (mut year, mut month) = first;
    loop {
        rows.push(MonthlyRevenue {
            year,
            month,
            month_name: month_name(month),
            revenue: totals.get(&(year, month)).copied().unwrap_or(0.0),
        });
        if (year, month) == last {
            break;
        }
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    rows
}

/// Revenue per product category, descending
pub fn revenue_by_category(records: &[SalesRecord]) -> Vec<CategoryRevenue> {
    let mut totals: HashMap<String, f64> = HashMap::new();

    for record in records {
        *totals.entry(record.category.clone()).or_insert(0.0) += record.price;
    }

    let mut rows: Vec<CategoryRevenue> = totals
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue { category, revenue })
        .collect();
    rows.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}

/// Revenue sum and transaction count per seller, in one pass, by name
pub fn seller_stats(records: &[SalesRecord]) -> Vec<SellerStats> {
    let mut totals: HashMap<String, (f64, u64)> = HashMap::new();

    for record in records {
        let entry = totals.entry(record.seller.clone()).or_insert((0.0, 0));
        entry.0 += record.price;
        entry.1 += 1;
    }

    let mut rows: Vec<SellerStats> = totals
        .into_iter()
        .map(|(seller, (revenue, sales_count))| SellerStats {
            seller,
            revenue,
            sales_count,
        })
        .collect();
    rows.sort_by(|a, b| a.seller.cmp(&b.seller));
    rows
}

fn month_name(month: u32) -> String {
    NaiveDate::from_ymd_opt(2000, month, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, price: f64, category: &str, seller: &str, state: &str) -> SalesRecord {
        let (lat, lon) = match state {
            "SP" => (-22.19, -48.79),
            "RJ" => (-22.25, -42.66),
            _ => (-13.29, -41.71),
        };
        SalesRecord {
            product: "Produto teste".into(),
            category: category.into(),
            price,
            freight: 10.0,
            purchase_date: NaiveDate::parse_from_str(date, "%d/%m/%Y").unwrap(),
            seller: seller.into(),
            state: state.into(),
            rating: 4,
            payment_type: "cartao_credito".into(),
            installments: 1,
            lat,
            lon,
        }
    }

    /// 10 records, 2 states, 2 categories, 3 sellers, 2 years.
    fn fixture() -> Vec<SalesRecord> {
        vec![
            record("15/01/2020", 100.0, "livros", "Ana Sousa", "SP"),
            record("20/01/2020", 200.0, "livros", "Beatriz Moraes", "SP"),
            record("03/02/2020", 50.0, "brinquedos", "Ana Sousa", "RJ"),
            record("10/03/2020", 75.0, "brinquedos", "Carlos Prado", "RJ"),
            record("28/03/2020", 125.0, "livros", "Carlos Prado", "SP"),
            record("07/01/2021", 300.0, "livros", "Ana Sousa", "SP"),
            record("19/01/2021", 40.0, "brinquedos", "Beatriz Moraes", "RJ"),
            record("23/02/2021", 60.0, "brinquedos", "Beatriz Moraes", "RJ"),
            record("02/03/2021", 90.0, "livros", "Carlos Prado", "SP"),
            record("30/03/2021", 110.0, "livros", "Ana Sousa", "SP"),
        ]
    }

    #[test]
    fn aggregations_are_deterministic() {
        let records = fixture();
        assert_eq!(revenue_by_state(&records), revenue_by_state(&records));
        assert_eq!(monthly_revenue(&records), monthly_revenue(&records));
        assert_eq!(revenue_by_category(&records), revenue_by_category(&records));
        assert_eq!(seller_stats(&records), seller_stats(&records));
    }

    #[test]
    fn revenue_by_state_is_sorted_descending_with_coordinates() {
        let rows = revenue_by_state(&fixture());
        assert_eq!(rows.len(), 2);
        for pair in rows.windows(2) {
            assert!(pair[0].revenue >= pair[1].revenue);
        }
        let sp = rows.iter().find(|r| r.state == "SP").unwrap();
        assert_eq!(sp.revenue, 100.0 + 200.0 + 125.0 + 300.0 + 90.0 + 110.0);
        // Coordinates come from the first SP record.
        assert_eq!((sp.lat, sp.lon), (-22.19, -48.79));
    }

    #[test]
    fn monthly_revenue_is_chronological_and_gap_filled() {
        let rows = monthly_revenue(&fixture());
        // Jan 2020 through Mar 2021 inclusive.
        assert_eq!(rows.len(), 15);
        assert_eq!((rows[0].year, rows[0].month), (2020, 1));
        assert_eq!(rows[0].month_name, "January");
        assert_eq!(rows[0].revenue, 300.0);
        let last = rows.last().unwrap();
        assert_eq!((last.year, last.month), (2021, 3));
        // Months with no sales are present at zero.
        let april_2020 = rows.iter().find(|r| r.year == 2020 && r.month == 4).unwrap();
        assert_eq!(april_2020.revenue, 0.0);
        for pair in rows.windows(2) {
            assert!((pair[0].year, pair[0].month) < (pair[1].year, pair[1].month));
        }
    }

    #[test]
    fn revenue_by_category_is_sorted_descending() {
        let rows = revenue_by_category(&fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "livros");
        assert_eq!(rows[0].revenue, 925.0);
        assert_eq!(rows[1].category, "brinquedos");
        assert_eq!(rows[1].revenue, 225.0);
    }

    #[test]
    fn seller_stats_sum_and_count_in_one_pass() {
        let rows = seller_stats(&fixture());
        assert_eq!(rows.len(), 3);
        let ana = rows.iter().find(|r| r.seller == "Ana Sousa").unwrap();
        assert_eq!(ana.revenue, 100.0 + 50.0 + 300.0 + 110.0);
        assert_eq!(ana.sales_count, 4);
    }

    #[test]
    fn seller_filter_is_idempotent() {
        let subset = vec!["Ana Sousa".to_string(), "Carlos Prado".to_string()];
        let once = apply_seller_filter(fixture(), &subset);
        let twice = apply_seller_filter(once.clone(), &subset);
        assert_eq!(once, twice);
        assert!(once.iter().all(|r| subset.contains(&r.seller)));
    }

    #[test]
    fn empty_seller_subset_passes_through() {
        let records = fixture();
        assert_eq!(apply_seller_filter(records.clone(), &[]), records);
    }

    #[test]
    fn ten_record_scenario_totals_match() {
        let records = fixture();
        let expected_total: f64 = records.iter().map(|r| r.price).sum();
        let overview = build_overview(records, vec![]);
        assert_eq!(overview.total_revenue, expected_total);
        assert_eq!(overview.total_sales, 10);
        // The top-5 states chart can hold at most the distinct states.
        assert!(overview.revenue_by_state.len() <= 2);
    }

    #[test]
    fn empty_input_yields_zero_totals_and_empty_series() {
        let overview = build_overview(Vec::new(), Vec::new());
        assert_eq!(overview.total_revenue, 0.0);
        assert_eq!(overview.total_sales, 0);
        assert!(overview.revenue_by_state.is_empty());
        assert!(overview.monthly_revenue.is_empty());
        assert!(overview.revenue_by_category.is_empty());
        assert!(overview.seller_stats.is_empty());
        assert!(overview.records.is_empty());
    }

    #[test]
    fn records_parse_from_api_payload_shape() {
        let payload = r#"[{
            "Produto": "Xadrez de madeira",
            "Categoria do Produto": "brinquedos",
            "Preço": 25.23,
            "Frete": 1.69,
            "Data da Compra": "20/06/2021",
            "Vendedor": "Ana Sousa",
            "Local da compra": "RJ",
            "Avaliação da compra": 5,
            "Tipo de pagamento": "boleto",
            "Quantidade de parcelas": 1,
            "lat": -22.25,
            "lon": -42.66
        }]"#;
        let records: Vec<SalesRecord> = serde_json::from_str(payload).unwrap();
        let rows = revenue_by_state(&records);
        assert_eq!(rows[0].state, "RJ");
        assert_eq!(rows[0].revenue, 25.23);
    }
}
