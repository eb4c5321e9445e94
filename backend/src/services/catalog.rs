//! `GET /api/config`: the options offered by the brief form's select fields.

use actix_web::{HttpResponse, Responder};
use common::model::config::AppConfig;

pub(crate) async fn process() -> impl Responder {
    HttpResponse::Ok().json(AppConfig::catalog())
}
