use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use chrono::Duration as ChronoDuration;
use session_manager::spawn_sweeper;
use tracing::{error, info};

use crate::config::RuntimeSettings;
use crate::controllers::{execute_controller, pipeline_controller, system_controller};

pub use crate::state::AppState;

const DEFAULT_WORKER_COUNT: usize = 10;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(system_controller::config)
        .configure(pipeline_controller::config)
        .configure(execute_controller::config);
}

pub async fn run(port: u16, settings: RuntimeSettings) -> Result<(), String> {
    info!("Starting web service...");

    let app_state = web::Data::new(AppState::new());

    let retention = ChronoDuration::from_std(settings.session_retention)
        .map_err(|e| format!("Invalid session retention: {e}"))?;
    spawn_sweeper(app_state.executions.clone(), settings.sweep_interval, retention);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("0.0.0.0:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Web service listening on http://0.0.0.0:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
