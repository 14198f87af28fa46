pub mod router;
pub mod server;
pub mod state;
pub mod tracing;

use crate::config;
use crate::error::AppError;
use tokio_util::sync::CancellationToken;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), AppError> {
    // `healthcheck` subcommand for container health probes
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!(?settings, "Loaded settings");

    let app_state = state::AppState::from_settings(&settings).await?;
    let app = router::app_router(
        app_state.article_service,
        &settings.public_dir,
        &settings.docs_dir,
    );

    server::serve(app, settings.http_port, CancellationToken::new()).await
}
