use crate::utils::logger::LogFormat;
use clap::Parser;

/// 所有參數也可由環境變數提供；未給的值交給設定檔或預設值
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "solar-weather-api")]
#[command(about = "Weather API backing the solar-energy estimator")]
pub struct CliArgs {
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "WORKER_THREADS")]
    pub worker_threads: Option<usize>,

    #[arg(long, env = "OPEN_METEO_URL")]
    pub upstream_url: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout: Option<u64>,

    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, env = "SOLAR_WEATHER_CONFIG")]
    pub config: Option<String>,

    #[arg(long, env = "LOG_FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
