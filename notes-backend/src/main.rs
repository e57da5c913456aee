use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use notes_backend::{AppState, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!("Notes backend v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Id policy: {}", config.id_policy);

    // One state for every worker, so they all see the same store
    let state = web::Data::new(AppState::new(config.clone()));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(notes_backend::cors())
            .configure(notes_backend::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    log::info!("Server is running on {}", config.base_url());

    let server_handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down (in-memory notes are discarded)...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop)
            .await
            .is_err()
        {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
