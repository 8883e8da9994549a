use crate::core::{daily_block, round_to};
use crate::domain::model::{ForecastQuery, WeeklySummary};
use crate::utils::error::{Result, WeatherError};
use serde_json::{Number, Value};
use std::cmp::Ordering;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// 取出數值，略過 null 與非數字
fn numbers(daily: &Value, key: &str) -> Vec<f64> {
    daily
        .get(key)
        .and_then(|v| v.as_array())
        .map(|items| items.iter().filter_map(|v| v.as_f64()).collect())
        .unwrap_or_default()
}

/// 保留上游原本的數字型別（整數或浮點）
fn raw_numbers<'a>(daily: &'a Value, key: &str) -> Vec<&'a Number> {
    daily
        .get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| match v {
                    Value::Number(n) if n.as_f64().is_some() => Some(n),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn extreme(values: &[&Number], wanted: Ordering) -> Option<Number> {
    values
        .iter()
        .copied()
        .reduce(|best, candidate| {
            let a = candidate.as_f64().unwrap_or(f64::NAN);
            let b = best.as_f64().unwrap_or(f64::NAN);
            if a.partial_cmp(&b) == Some(wanted) {
                candidate
            } else {
                best
            }
        })
        .cloned()
}

/// 天氣代碼；`3.0` 這類整數值浮點也算
fn codes(daily: &Value) -> Vec<i64> {
    daily
        .get("weather_code")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| {
                    v.as_i64()
                        .or_else(|| v.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                })
                .collect()
        })
        .unwrap_or_default()
}

fn has_entries(daily: &Value, key: &str) -> bool {
    daily
        .get(key)
        .and_then(|v| v.as_array())
        .is_some_and(|items| !items.is_empty())
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// 眾數；同票時取最先出現者
fn mode(values: &[i64]) -> Option<i64> {
    let mut counts: Vec<(i64, usize)> = Vec::new();
    for &value in values {
        match counts.iter_mut().find(|(code, _)| *code == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(i64, usize)> = None;
    for (code, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((code, count));
        }
    }
    best.map(|(code, _)| code)
}

fn first_and_last_time(daily: &Value) -> Option<(String, String)> {
    let times = daily.get("time")?.as_array()?;
    let first = times.first()?.as_str()?.to_string();
    let last = times.last()?.as_str()?.to_string();
    Some((first, last))
}

pub fn summarize_week(raw: &Value, query: &ForecastQuery) -> Result<WeeklySummary> {
    let daily = daily_block(raw)?;

    let tracked = [
        "pressure_msl_mean",
        "temperature_2m_max",
        "temperature_2m_min",
        "sunshine_duration",
        "weather_code",
    ];
    if !tracked.iter().any(|key| has_entries(daily, key)) {
        return Err(WeatherError::EmptyDataSet);
    }

    let pressures = numbers(daily, "pressure_msl_mean");
    let t_max = raw_numbers(daily, "temperature_2m_max");
    let t_min = raw_numbers(daily, "temperature_2m_min");
    let sunshine = numbers(daily, "sunshine_duration");

    let (start_date, end_date) = first_and_last_time(daily).unwrap_or_else(|| {
        (
            query.start_date.format("%Y-%m-%d").to_string(),
            query.end_date.format("%Y-%m-%d").to_string(),
        )
    });

    Ok(WeeklySummary {
        avg_pressure_hpa: mean(&pressures).map(|p| round_to(p, 1)),
        weekly_max_temp: extreme(&t_max, Ordering::Greater),
        weekly_min_temp: extreme(&t_min, Ordering::Less),
        avg_sunshine_hours: mean(&sunshine).map(|s| round_to(s / SECONDS_PER_HOUR, 2)),
        most_frequent_weather_code: mode(&codes(daily)),
        latitude: raw.get("latitude").and_then(|v| v.as_f64()),
        longitude: raw.get("longitude").and_then(|v| v.as_f64()),
        start_date: Some(start_date),
        end_date: Some(end_date),
    })
}
