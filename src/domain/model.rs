use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 已驗證並四捨五入到小數點後兩位的座標
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastKind {
    /// `/api/weather`：逐日資料，不含氣壓
    Daily,
    /// `/api/weekly`：週統計，額外要求 `pressure_msl_mean`
    Weekly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastQuery {
    pub coordinates: Coordinates,
    pub kind: ForecastKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<serde_json::Value>,
    pub sunshine_duration: Vec<serde_json::Value>,
    pub temperature_2m_max: Vec<serde_json::Value>,
    pub temperature_2m_min: Vec<serde_json::Value>,
    pub weather_code: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyUnits {
    pub sunshine_duration: String,
    pub temperature_2m_max: String,
    pub temperature_2m_min: String,
}

/// 前端需要的逐日欄位
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub daily: DailySeries,
    pub daily_units: DailyUnits,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    #[serde(rename = "avg_pressure_hPa")]
    pub avg_pressure_hpa: Option<f64>,
    /// 沿用上游的數字型別，整數不會變成 `10.0`
    pub weekly_max_temp: Option<serde_json::Number>,
    pub weekly_min_temp: Option<serde_json::Number>,
    pub avg_sunshine_hours: Option<f64>,
    pub most_frequent_weather_code: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
