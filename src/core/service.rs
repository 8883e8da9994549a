use crate::core::daily::project_daily;
use crate::core::query::parse_coordinate;
use crate::core::weekly::summarize_week;
use crate::domain::model::{DailyForecast, ForecastKind, ForecastQuery, WeeklySummary};
use crate::domain::ports::WeatherSource;
use crate::utils::error::{Result, WeatherError};
use std::sync::Arc;

/// 路徑參數原樣傳入，驗證失敗時不會呼叫上游
pub struct WeatherService {
    source: Arc<dyn WeatherSource>,
}

impl WeatherService {
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }

    fn prepare(
        &self,
        lat: &str,
        lon: &str,
        kind: ForecastKind,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<ForecastQuery> {
        let latitude = parse_coordinate("latitude", lat)?;
        let longitude = parse_coordinate("longitude", lon)?;
        let today = chrono::Local::now().date_naive();

        let query = ForecastQuery::build(latitude, longitude, kind, start, end, today)?;
        tracing::debug!(
            "Forecast query: kind={:?} lat={} lon={} range={}..{}",
            query.kind,
            query.coordinates.latitude,
            query.coordinates.longitude,
            query.start_date,
            query.end_date
        );
        Ok(query)
    }

    pub async fn daily(
        &self,
        lat: &str,
        lon: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<DailyForecast> {
        self.try_daily(lat, lon, start, end)
            .await
            .inspect_err(|e| log_failure("daily", lat, lon, e))
    }

    pub async fn weekly(
        &self,
        lat: &str,
        lon: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<WeeklySummary> {
        self.try_weekly(lat, lon, start, end)
            .await
            .inspect_err(|e| log_failure("weekly", lat, lon, e))
    }

    async fn try_daily(
        &self,
        lat: &str,
        lon: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<DailyForecast> {
        let query = self.prepare(lat, lon, ForecastKind::Daily, start, end)?;
        let raw = self.source.fetch_forecast(&query).await?;
        let forecast = project_daily(&raw)?;

        tracing::debug!("Daily forecast with {} days", forecast.daily.time.len());
        Ok(forecast)
    }

    async fn try_weekly(
        &self,
        lat: &str,
        lon: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<WeeklySummary> {
        let query = self.prepare(lat, lon, ForecastKind::Weekly, start, end)?;
        let raw = self.source.fetch_forecast(&query).await?;
        summarize_week(&raw, &query)
    }
}

fn log_failure(kind: &str, lat: &str, lon: &str, err: &WeatherError) {
    tracing::warn!(
        "{} forecast failed for ({}, {}): {} (Category: {:?})",
        kind,
        lat,
        lon,
        err,
        err.category()
    );
}
