use crate::core::round_to;
use crate::domain::model::{Coordinates, ForecastKind, ForecastQuery};
use crate::utils::error::{
    Result, WeatherError, COORDINATE_RANGE_MESSAGE, NUMERIC_COORDINATES_MESSAGE,
};
use chrono::{Duration, NaiveDate};
use url::Url;

pub const DEFAULT_FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

/// 預設查詢區間（今天起算）
pub const DEFAULT_RANGE_DAYS: i64 = 7;

const DAILY_VARIABLES: &str = "sunshine_duration,temperature_2m_max,temperature_2m_min,weather_code";
const PRESSURE_VARIABLE: &str = "pressure_msl_mean";

/// 解析路徑上的座標片段
pub fn parse_coordinate(field_name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        tracing::debug!("Rejecting non-numeric {}: {:?}", field_name, raw);
        WeatherError::invalid_coordinates(NUMERIC_COORDINATES_MESSAGE)
    })?;

    if !value.is_finite() {
        return Err(WeatherError::invalid_coordinates(NUMERIC_COORDINATES_MESSAGE));
    }

    Ok(value)
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| WeatherError::InvalidDate {
        value: raw.to_string(),
    })
}

impl ForecastQuery {
    pub fn build(
        latitude: f64,
        longitude: f64,
        kind: ForecastKind,
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self> {
        // 範圍檢查以整數部分為準，-90.4 視為 -90
        let lat_whole = latitude.trunc();
        let lon_whole = longitude.trunc();
        if !(-90.0..=90.0).contains(&lat_whole) || !(-180.0..=180.0).contains(&lon_whole) {
            return Err(WeatherError::invalid_coordinates(COORDINATE_RANGE_MESSAGE));
        }

        let start_date = match start {
            Some(raw) => parse_date(raw)?,
            None => today,
        };
        let end_date = match end {
            Some(raw) => parse_date(raw)?,
            None => today + Duration::days(DEFAULT_RANGE_DAYS),
        };

        if start_date > end_date {
            return Err(WeatherError::InvalidDateRange);
        }

        Ok(Self {
            coordinates: Coordinates {
                latitude: round_to(latitude, 2),
                longitude: round_to(longitude, 2),
            },
            kind,
            start_date,
            end_date,
        })
    }

    pub fn daily_variables(&self) -> String {
        match self.kind {
            ForecastKind::Daily => DAILY_VARIABLES.to_string(),
            ForecastKind::Weekly => format!("{},{}", DAILY_VARIABLES, PRESSURE_VARIABLE),
        }
    }
}

/// 組出 Open-Meteo forecast 請求網址
pub fn forecast_url(endpoint: &Url, query: &ForecastQuery) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("latitude", &query.coordinates.latitude.to_string())
        .append_pair("longitude", &query.coordinates.longitude.to_string())
        .append_pair("daily", &query.daily_variables())
        .append_pair("timezone", "auto")
        .append_pair("start_date", &query.start_date.format("%Y-%m-%d").to_string())
        .append_pair("end_date", &query.end_date.format("%Y-%m-%d").to_string());
    url
}
