use crate::errors::AppError;
use crate::metrics::{campaign_rows, chart_series};
use crate::models::{CampaignRow, ChartSeries};
use crate::report::Report;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.report))
}

pub async fn get_report(State(state): State<AppState>) -> Json<Report> {
    Json((*state.report).clone())
}

pub async fn get_campaigns(State(state): State<AppState>) -> Json<Vec<CampaignRow>> {
    Json(campaign_rows(&state.report.campaigns))
}

pub async fn get_chart(
    State(state): State<AppState>,
    Path(metric): Path<String>,
) -> Result<Json<ChartSeries>, AppError> {
    chart_series(metric.trim(), &state.report.campaigns)
        .map(Json)
        .ok_or_else(|| AppError::bad_request("metric must be 'spend' or 'conv_rate'"))
}
