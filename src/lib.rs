pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use crate::adapters::OpenMeteoClient;
pub use crate::config::{CliArgs, Settings, TomlConfig};
pub use crate::core::service::WeatherService;
pub use crate::http::build_router;
pub use crate::utils::error::{Result, WeatherError};
