use actix_web::{HttpResponse, Responder};
use common::requests::HealthStatus;

pub(crate) async fn process() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy".to_string(),
    })
}
