use anyhow::Context;
use clap::Parser;
use solar_weather_api::core::ConfigProvider;
use solar_weather_api::utils::{logger, validation::Validate};
use solar_weather_api::{build_router, CliArgs, OpenMeteoClient, Settings, WeatherService};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let settings = match Settings::load(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(settings.log_format, settings.verbose);
    tracing::debug!("Resolved settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 工作執行緒數量固定，由設定決定
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(settings.worker_threads())
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime.block_on(serve(settings))
}

async fn serve(settings: Settings) -> anyhow::Result<()> {
    let client = OpenMeteoClient::from_config(&settings)?;
    tracing::info!("Using Open-Meteo endpoint: {}", client.endpoint());

    let service = Arc::new(WeatherService::new(Arc::new(client)));
    let router = build_router(service, settings.cors_origins());

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        "🚀 Listening on {} with {} worker threads",
        addr,
        settings.worker_threads()
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
