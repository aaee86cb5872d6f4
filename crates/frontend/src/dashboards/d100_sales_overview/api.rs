use contracts::dashboards::d100_sales_overview::{SalesOverviewRequest, SalesOverviewResponse};
use contracts::sales::FilterSelection;
use gloo_net::http::Request;

const API_BASE: &str = "/api/d100";

/// Fetch the full dashboard dataset for the current filter selection
pub async fn get_sales_overview(
    selection: &FilterSelection,
) -> Result<SalesOverviewResponse, String> {
    let request = SalesOverviewRequest::from_selection(selection);
    let url = format!(
        "{}/sales_overview?regiao={}&ano={}&vendedores={}",
        API_BASE,
        urlencoding::encode(&request.regiao),
        urlencoding::encode(&request.ano),
        urlencoding::encode(&request.vendedores)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SalesOverviewResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
