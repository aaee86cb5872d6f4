use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d100_sales_overview::{SalesOverviewRequest, SalesOverviewResponse};

use crate::dashboards::d100_sales_overview::service;
use crate::shared::sales_api::SalesApiError;

/// GET /api/d100/sales_overview?regiao=sul&ano=2021&vendedores=Ana%20Sousa
pub async fn get_sales_overview(
    Query(request): Query<SalesOverviewRequest>,
) -> Result<Json<SalesOverviewResponse>, StatusCode> {
    tracing::info!(
        "D100 Dashboard: Getting sales overview (regiao='{}', ano='{}', vendedores='{}')",
        request.regiao,
        request.ano,
        request.vendedores
    );

    match service::get_sales_overview(request).await {
        Ok(response) => {
            tracing::info!(
                "D100 Dashboard: Returning {} records across {} states",
                response.records.len(),
                response.revenue_by_state.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to get sales overview: {}", e);
            // Upstream failures are not our fault: answer 502 so the
            // frontend can tell them apart from server bugs.
            if e.downcast_ref::<SalesApiError>().is_some() {
                Err(StatusCode::BAD_GATEWAY)
            } else {
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
