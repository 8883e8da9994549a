use crate::http::AppState;
use crate::utils::error::WeatherError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// `/:lat/:lon` 與 `/:lat/:lon/:start/:end` 共用
#[derive(Debug, Deserialize)]
pub struct ForecastPath {
    pub lat: String,
    pub lon: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(
                "Request failed: {} (Category: {:?}, Suggestion: {})",
                self,
                self.category(),
                self.recovery_suggestion()
            );
        } else {
            // 失敗已在 WeatherService 記錄 warn
            tracing::debug!("Request rejected: {} ({})", self, status);
        }

        let body = serde_json::json!({
            "status": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

pub async fn weather_daily(
    State(state): State<AppState>,
    Path(path): Path<ForecastPath>,
) -> Result<impl IntoResponse, WeatherError> {
    let forecast = state
        .service
        .daily(
            &path.lat,
            &path.lon,
            path.start.as_deref(),
            path.end.as_deref(),
        )
        .await?;
    Ok(Json(forecast))
}

pub async fn weather_weekly(
    State(state): State<AppState>,
    Path(path): Path<ForecastPath>,
) -> Result<impl IntoResponse, WeatherError> {
    let summary = state
        .service
        .weekly(
            &path.lat,
            &path.lon,
            path.start.as_deref(),
            path.end.as_deref(),
        )
        .await?;
    Ok(Json(summary))
}

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
