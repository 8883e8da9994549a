use crate::core::daily_block;
use crate::domain::model::{DailyForecast, DailySeries, DailyUnits};
use crate::utils::error::Result;
use serde_json::Value;

fn series(daily: &Value, key: &str) -> Vec<Value> {
    daily
        .get(key)
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}

fn unit(units: Option<&Value>, key: &str) -> String {
    units
        .and_then(|u| u.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// 只保留前端需要的逐日欄位
pub fn project_daily(raw: &Value) -> Result<DailyForecast> {
    let daily = daily_block(raw)?;
    let units = raw.get("daily_units");

    Ok(DailyForecast {
        daily: DailySeries {
            time: series(daily, "time"),
            sunshine_duration: series(daily, "sunshine_duration"),
            temperature_2m_max: series(daily, "temperature_2m_max"),
            temperature_2m_min: series(daily, "temperature_2m_min"),
            weather_code: series(daily, "weather_code"),
        },
        daily_units: DailyUnits {
            sunshine_duration: unit(units, "sunshine_duration"),
            temperature_2m_max: unit(units, "temperature_2m_max"),
            temperature_2m_min: unit(units, "temperature_2m_min"),
        },
    })
}
