use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::common::{DashboardCatalog, DashboardPayload, ViewParams};
use contracts::enums::DashboardView;

use crate::dashboards;
use crate::routes::AppState;

/// GET /api/dashboards
pub async fn get_catalog(State(state): State<AppState>) -> Json<DashboardCatalog> {
    Json(dashboards::catalog(&state.dataset))
}

/// GET /api/dashboards/:view?top_n=10
pub async fn get_view(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<ViewParams>,
) -> Result<Json<DashboardPayload>, StatusCode> {
    let Some(view) = DashboardView::from_code(&code) else {
        tracing::warn!("Dashboards: unknown view '{}'", code);
        return Err(StatusCode::NOT_FOUND);
    };

    tracing::info!(
        "Dashboards: rendering {} (top_n = {:?})",
        view.display_name(),
        params.top_n
    );

    let payload = dashboards::render_view(view, &state.dataset, &params, state.default_top_n);

    tracing::info!(
        "Dashboards: returning {} over {} records",
        view.code(),
        state.dataset.len()
    );
    Ok(Json(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::RawTransaction;
    use crate::shared::analytics::load_and_clean;
    use std::sync::Arc;

    fn state() -> AppState {
        let rows = vec![
            RawTransaction::new("A", Some("1"), 2, 5.0, "2024-01-05T10:00").with_description("MUG"),
            RawTransaction::new("B", Some("2"), -1, 5.0, "2024-02-01T14:00").with_description("MUG"),
        ];
        AppState {
            dataset: Arc::new(load_and_clean(rows, &[]).unwrap()),
            default_top_n: 10,
        }
    }

    #[tokio::test]
    async fn test_get_view_by_code() {
        let result = get_view(
            State(state()),
            Path("sales-trends".to_string()),
            Query(ViewParams::default()),
        )
        .await;
        let Json(payload) = result.unwrap();
        let DashboardPayload::SalesTrends(trends) = payload else {
            panic!("expected sales trends payload");
        };
        assert_eq!(trends.revenue_trend.rows.len(), 2);
        assert_eq!(trends.revenue_trend.rows[1].revenue, -5.0);
    }

    #[tokio::test]
    async fn test_overview_json_shape() {
        let Json(payload) = get_view(
            State(state()),
            Path("overview".to_string()),
            Query(ViewParams::default()),
        )
        .await
        .unwrap();

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["view"], "overview");
        assert_eq!(value["kpi"]["total_revenue"], 5.0);
        assert_eq!(value["kpi"]["total_invoices"], 2);
        assert_eq!(value["cards"][0]["display"], "$5.00");
    }

    #[tokio::test]
    async fn test_unknown_view_is_not_found() {
        let result = get_view(
            State(state()),
            Path("tab-5".to_string()),
            Query(ViewParams::default()),
        )
        .await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_catalog_counts_records() {
        let Json(catalog) = get_catalog(State(state())).await;
        assert_eq!(catalog.record_count, 2);
        assert_eq!(catalog.views.len(), 4);
        assert_eq!(catalog.views[0].view, DashboardView::Overview);
    }
}
