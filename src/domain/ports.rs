use crate::domain::model::ForecastQuery;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 預報資料來源（正式環境為 Open-Meteo）
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// 上游回應 2xx 時回傳原始 JSON
    async fn fetch_forecast(&self, query: &ForecastQuery) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn upstream_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn bind_address(&self) -> String;
    fn worker_threads(&self) -> usize;
    fn cors_origins(&self) -> &[String];
}
