use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;

use crate::dto::HealthResponse;

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        message: "PromptMesh API server is running".to_string(),
        time: Utc::now().to_rfc3339(),
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(health_check)))
        .service(web::resource("/health").route(web::get().to(health_check)));
}
