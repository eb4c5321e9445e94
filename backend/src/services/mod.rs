//! # API Service Module
//!
//! Routes every endpoint under `/api`. Anything outside this scope falls
//! through to the embedded SPA.
//!
//! ## Sub-modules:
//! - `catalog`: the form options offered by `GET /api/config`.
//! - `health`: liveness probe.
//! - `generation`: validation and forwarding of copy and image requests.

mod catalog;
mod generation;
mod health;

use actix_web::web::{self, get, post, scope};
use actix_web::Scope;

use crate::error::ProxyError;

const API_PATH: &str = "/api";

/// Largest accepted request body.
const JSON_LIMIT: usize = 1024 * 1024;

/// Configures and returns the Actix `Scope` for the studio API.
///
/// # Registered Routes:
///
/// *   **`GET /config`**: industries, platforms and objectives for the brief form.
/// *   **`GET /health`**: always `{"status": "healthy"}`.
/// *   **`POST /generate`**: checks that the brief carries all five fields and
///     forwards it to the content-generation service.
/// *   **`POST /generate-image`**: checks the prompt, defaults the size to
///     `1024x1024` and forwards it.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/config", get().to(catalog::process))
        .route("/health", get().to(health::process))
        .route("/generate", post().to(generation::generate))
        .route("/generate-image", post().to(generation::generate_image))
}

/// JSON extractor settings. Unparseable bodies are answered like any other
/// API error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| ProxyError::InvalidBody(err.to_string()).into())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::net::TcpListener;

    use actix_web::{web, App, HttpResponse, HttpServer};
    use serde_json::{json, Value};

    use crate::upstream::ContentService;

    /// Registers the API the way `main` does, with `service` as upstream.
    pub fn configure(service: ContentService) -> impl FnOnce(&mut web::ServiceConfig) {
        move |cfg: &mut web::ServiceConfig| {
            cfg.app_data(web::Data::new(service))
                .app_data(super::json_config())
                .service(super::configure_routes());
        }
    }

    pub fn unconfigured_service() -> ContentService {
        ContentService::new(None)
    }

    pub fn unreachable_service() -> ContentService {
        // Nothing listens on the discard port.
        ContentService::new(Some("http://127.0.0.1:9".to_string()))
    }

    /// Starts a stand-in content service on a free local port. Its
    /// `/api/generate` answers by industry: `Finance` fails with 500,
    /// `SaaS` returns HTML, anything else echoes the brief in a bundle.
    pub fn start_upstream() -> ContentService {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind upstream listener");
        let addr = listener.local_addr().expect("upstream address");
        let server = HttpServer::new(|| {
            App::new()
                .route("/api/generate", web::post().to(fake_generate))
                .route("/api/generate-image", web::post().to(fake_generate_image))
        })
        .workers(1)
        .listen(listener)
        .expect("listen on upstream socket")
        .run();
        actix_web::rt::spawn(server);
        ContentService::new(Some(format!("http://{}", addr)))
    }

    async fn fake_generate(brief: web::Json<Value>) -> HttpResponse {
        let industry = brief["industry"].as_str().unwrap_or_default().to_string();
        match industry.as_str() {
            "Finance" => HttpResponse::InternalServerError().json(json!({ "error": "boom" })),
            "SaaS" => HttpResponse::Ok()
                .content_type("text/html")
                .body("<h1>Down for maintenance</h1>"),
            _ => HttpResponse::Ok().json(json!({
                "brief": brief.into_inner(),
                "copy_variations": [{
                    "headline": "Relief without the wait",
                    "primary_text": "Book a same-day visit.",
                    "cta": "Book now",
                }],
                "image_prompts": [],
                "disclaimers": ["Consult a qualified professional."],
            })),
        }
    }

    async fn fake_generate_image(body: web::Json<Value>) -> HttpResponse {
        let size = body["size"].as_str().unwrap_or_default();
        HttpResponse::Ok().json(json!({ "image_url": format!("https://img.example/{}.png", size) }))
    }
}
