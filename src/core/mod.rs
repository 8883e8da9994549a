pub mod daily;
pub mod query;
pub mod service;
pub mod weekly;

pub use crate::domain::model::{DailyForecast, ForecastKind, ForecastQuery, WeeklySummary};
pub use crate::domain::ports::{ConfigProvider, WeatherSource};
pub use crate::utils::error::Result;

use crate::utils::error::WeatherError;
use serde_json::Value;

/// 四捨六入五成雙（banker's rounding）
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// 取出上游 payload 的 `daily` 區塊；空 payload 或缺少時視為無資料
pub(crate) fn daily_block(raw: &Value) -> Result<&Value> {
    match raw.as_object() {
        Some(obj) if !obj.is_empty() => obj.get("daily").ok_or(WeatherError::NoData),
        _ => Err(WeatherError::NoData),
    }
}
