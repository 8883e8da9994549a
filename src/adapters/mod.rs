// Adapters layer: concrete implementations for external systems.

pub mod open_meteo;

pub use open_meteo::OpenMeteoClient;
