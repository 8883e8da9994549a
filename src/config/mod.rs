pub mod cli;
pub mod toml_config;

pub use cli::CliArgs;
pub use toml_config::TomlConfig;

use crate::adapters::open_meteo::DEFAULT_REQUEST_TIMEOUT;
use crate::core::query::DEFAULT_FORECAST_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_WORKER_THREADS: usize = 8;

/// 合併後的最終設定：CLI/環境變數 > 設定檔 > 預設值
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub worker_threads: usize,
    pub upstream_endpoint: String,
    pub request_timeout_secs: u64,
    pub cors_origins: Vec<String>,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&CliArgs::default(), &TomlConfig::default())
    }
}

impl Settings {
    pub fn resolve(cli: &CliArgs, file: &TomlConfig) -> Self {
        let cors_origins = if !cli.cors_origins.is_empty() {
            cli.cors_origins.clone()
        } else {
            file.cors
                .allowed_origins
                .clone()
                .unwrap_or_else(|| vec!["*".to_string()])
        };

        Self {
            host: cli
                .host
                .clone()
                .or_else(|| file.server.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            worker_threads: cli
                .worker_threads
                .or(file.server.worker_threads)
                .unwrap_or(DEFAULT_WORKER_THREADS),
            upstream_endpoint: cli
                .upstream_url
                .clone()
                .or_else(|| file.upstream.endpoint.clone())
                .unwrap_or_else(|| DEFAULT_FORECAST_ENDPOINT.to_string()),
            request_timeout_secs: cli
                .request_timeout
                .or(file.upstream.timeout_seconds)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT.as_secs()),
            cors_origins,
            log_format: cli.log_format.or(file.logging.format).unwrap_or_default(),
            verbose: cli.verbose,
        }
    }

    /// 載入設定檔（若有指定）後合併
    pub fn load(cli: &CliArgs) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(Self::resolve(cli, &file))
    }
}

impl ConfigProvider for Settings {
    fn upstream_endpoint(&self) -> &str {
        &self.upstream_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn worker_threads(&self) -> usize {
        self.worker_threads
    }

    fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.host)?;
        validation::validate_range("server.port", self.port, 1, u16::MAX)?;
        validation::validate_range("server.worker_threads", self.worker_threads, 1, 256)?;
        validation::validate_url("upstream.endpoint", &self.upstream_endpoint)?;
        validation::validate_range("upstream.timeout_seconds", self.request_timeout_secs, 1, 300)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
