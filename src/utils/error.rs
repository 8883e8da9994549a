use axum::http::StatusCode;
use thiserror::Error;

pub const NUMERIC_COORDINATES_MESSAGE: &str =
    "Latitude and longitude must be numeric (e.g. 37.77 -122.42).";
pub const COORDINATE_RANGE_MESSAGE: &str = "Latitude must be −90…90 and longitude −180…180.";
pub const DATE_FORMAT_MESSAGE: &str = "Dates must be YYYY-MM-DD.";
pub const DATE_ORDER_MESSAGE: &str = "start_date cannot be after end_date.";
pub const NO_DATA_MESSAGE: &str = "No weather data found for the given location and date range.";
pub const EMPTY_DATA_SET_MESSAGE: &str = "Weather service returned empty data set.";
pub const UPSTREAM_MESSAGE: &str = "Open-Meteo error";

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("{message}")]
    InvalidCoordinates { message: String },

    #[error("{}", DATE_FORMAT_MESSAGE)]
    InvalidDate { value: String },

    #[error("{}", DATE_ORDER_MESSAGE)]
    InvalidDateRange,

    #[error("{}", NO_DATA_MESSAGE)]
    NoData,

    #[error("{}", EMPTY_DATA_SET_MESSAGE)]
    EmptyDataSet,

    #[error("{}", UPSTREAM_MESSAGE)]
    Upstream { status: u16 },

    #[error("Open-Meteo request failed: {0}")]
    UpstreamRequest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端輸入錯誤
    Client,
    /// Open-Meteo 回傳錯誤或無資料
    Upstream,
    Configuration,
    System,
}

impl WeatherError {
    pub fn invalid_coordinates(message: impl Into<String>) -> Self {
        Self::InvalidCoordinates {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCoordinates { .. } | Self::InvalidDate { .. } | Self::InvalidDateRange => {
                ErrorCategory::Client
            }
            Self::NoData | Self::EmptyDataSet | Self::Upstream { .. } | Self::UpstreamRequest(_) => {
                ErrorCategory::Upstream
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// 對應到回應給前端的 HTTP 狀態碼
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCoordinates { .. } | Self::InvalidDate { .. } | Self::InvalidDateRange => {
                StatusCode::BAD_REQUEST
            }
            Self::NoData | Self::EmptyDataSet => StatusCode::NOT_FOUND,
            // 上游狀態碼原樣轉發
            Self::Upstream { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::UpstreamRequest(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::UpstreamRequest(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidCoordinates { .. } => "Pass numeric latitude/longitude within range",
            Self::InvalidDate { .. } | Self::InvalidDateRange => {
                "Pass start and end dates as YYYY-MM-DD with start <= end"
            }
            Self::NoData | Self::EmptyDataSet => "Try a different location or date range",
            Self::Upstream { .. } | Self::UpstreamRequest(_) => {
                "Check Open-Meteo availability or increase the request timeout"
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check CLI flags, environment variables and the TOML config file"
            }
            Self::IoError(_) => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;
