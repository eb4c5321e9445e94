//! # Generation Proxy
//!
//! `POST /api/generate` and `POST /api/generate-image` are thin proxies over
//! the content-generation service.
//!
//! ## Workflow
//!
//! 1.  **Validation**: a brief must carry all five keys (`industry`,
//!     `platform`, `objective`, `audience`, `message`); only presence is
//!     checked here, the form enforces non-empty values. An image request
//!     needs a non-blank `prompt`; `size` defaults to `1024x1024`.
//! 2.  **Forwarding**: the payload is POSTed to the same path on
//!     `CONTENT_API_URL`.
//! 3.  **Relay**: the upstream status and JSON body are returned as-is, so
//!     the upstream `{"error": ...}` messages reach the browser verbatim.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::model::brief::BriefField;
use common::model::content::ImageSize;
use log::info;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ProxyError;
use crate::upstream::{ContentService, UpstreamReply};

const GENERATE_PATH: &str = "/api/generate";
const GENERATE_IMAGE_PATH: &str = "/api/generate-image";

#[derive(Debug, Deserialize)]
pub(crate) struct ImageRequestBody {
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    size: Option<String>,
}

pub(crate) async fn generate(
    service: web::Data<ContentService>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ProxyError> {
    let brief = body.into_inner();
    if let Some(field) = missing_field(&brief) {
        return Err(ProxyError::MissingField(field));
    }

    info!(
        "Generating campaign content: industry={} platform={} objective={}",
        text(&brief, BriefField::Industry),
        text(&brief, BriefField::Platform),
        text(&brief, BriefField::Objective),
    );
    let reply = service.forward(GENERATE_PATH, &brief).await?;
    Ok(relay(reply))
}

pub(crate) async fn generate_image(
    service: web::Data<ContentService>,
    body: web::Json<ImageRequestBody>,
) -> Result<HttpResponse, ProxyError> {
    let ImageRequestBody { prompt, size } = body.into_inner();
    let prompt = prompt
        .filter(|prompt| !prompt.trim().is_empty())
        .ok_or(ProxyError::MissingPrompt)?;
    let size = size.unwrap_or_else(|| ImageSize::default().as_str().to_string());

    info!("Generating image ({})", size);
    let reply = service
        .forward(GENERATE_IMAGE_PATH, &json!({ "prompt": prompt, "size": size }))
        .await?;
    Ok(relay(reply))
}

/// First brief key absent from `brief`, in form order.
fn missing_field(brief: &Value) -> Option<BriefField> {
    BriefField::ALL
        .into_iter()
        .find(|field| brief.get(field.name()).is_none())
}

fn text(brief: &Value, field: BriefField) -> &str {
    brief.get(field.name()).and_then(Value::as_str).unwrap_or_default()
}

fn relay(reply: UpstreamReply) -> HttpResponse {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    HttpResponse::build(status).json(reply.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, App};
    use common::requests::ApiErrorBody;

    use crate::services::test_support::{
        configure, start_upstream, unconfigured_service, unreachable_service,
    };

    fn full_brief() -> Value {
        json!({
            "industry": "Healthcare",
            "platform": "Meta",
            "objective": "Awareness",
            "audience": "Adults 30-55 managing chronic pain",
            "message": "Relief without the wait",
        })
    }

    async fn post_json(service: ContentService, uri: &str, payload: &Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(App::new().configure(configure(service))).await;
        let req = actix_test::TestRequest::post().uri(uri).set_json(payload).to_request();
        let resp = actix_test::call_service(&app, req).await;
        let status = resp.status();
        (status, actix_test::read_body_json(resp).await)
    }

    async fn post(service: ContentService, uri: &str, payload: &Value) -> (StatusCode, ApiErrorBody) {
        let (status, body) = post_json(service, uri, payload).await;
        (status, serde_json::from_value(body).unwrap())
    }

    #[test]
    fn first_missing_key_is_reported() {
        let mut brief = full_brief();
        brief.as_object_mut().unwrap().remove("objective");
        brief.as_object_mut().unwrap().remove("message");
        assert_eq!(missing_field(&brief), Some(BriefField::Objective));
        assert_eq!(missing_field(&full_brief()), None);
    }

    #[test]
    fn empty_values_count_as_present() {
        let mut brief = full_brief();
        brief["audience"] = json!("");
        assert_eq!(missing_field(&brief), None);
    }

    #[actix_web::test]
    async fn brief_without_audience_is_rejected() {
        let mut brief = full_brief();
        brief.as_object_mut().unwrap().remove("audience");

        let (status, body) = post(unconfigured_service(), "/api/generate", &brief).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing required field: audience");
    }

    #[actix_web::test]
    async fn non_object_body_misses_the_first_field() {
        let (status, body) = post(unconfigured_service(), "/api/generate", &json!(["Healthcare"])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing required field: industry");
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let app = actix_test::init_service(App::new().configure(configure(unconfigured_service()))).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/generate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"industry\":")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiErrorBody = actix_test::read_body_json(resp).await;
        assert!(body.error.starts_with("Invalid request body"));
    }

    #[actix_web::test]
    async fn valid_brief_without_upstream_is_unavailable() {
        let (status, body) = post(unconfigured_service(), "/api/generate", &full_brief()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.error, "Content generation service is not configured");
    }

    #[actix_web::test]
    async fn unreachable_upstream_is_a_bad_gateway() {
        let (status, body) = post(unreachable_service(), "/api/generate", &full_brief()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.error.starts_with("Content generation service is unreachable"));
    }

    #[actix_web::test]
    async fn image_request_needs_a_prompt() {
        for payload in [json!({ "size": "1792x1024" }), json!({ "prompt": "   " })] {
            let (status, body) = post(unconfigured_service(), "/api/generate-image", &payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.error, "Missing prompt");
        }
    }

    #[actix_web::test]
    async fn image_request_with_prompt_reaches_the_upstream_check() {
        let payload = json!({ "prompt": "Calm clinic waiting room, morning light" });
        let (status, _) = post(unconfigured_service(), "/api/generate-image", &payload).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn upstream_bundle_is_relayed_unchanged() {
        let (status, body) = post_json(start_upstream(), "/api/generate", &full_brief()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["brief"], full_brief());
        assert_eq!(body["copy_variations"][0]["headline"], "Relief without the wait");
        assert_eq!(body["disclaimers"], json!(["Consult a qualified professional."]));
    }

    #[actix_web::test]
    async fn upstream_error_status_and_body_pass_through() {
        let mut brief = full_brief();
        brief["industry"] = json!("Finance");

        let (status, body) = post_json(start_upstream(), "/api/generate", &brief).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "boom" }));
    }

    #[actix_web::test]
    async fn non_json_upstream_answer_is_a_bad_gateway() {
        let mut brief = full_brief();
        brief["industry"] = json!("SaaS");

        let (status, body) = post(start_upstream(), "/api/generate", &brief).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body.error,
            "Content generation service returned an invalid response (status 200)"
        );
    }

    #[actix_web::test]
    async fn image_request_is_forwarded_with_the_default_size() {
        let payload = json!({ "prompt": "Calm clinic waiting room, morning light" });
        let (status, body) = post_json(start_upstream(), "/api/generate-image", &payload).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "image_url": "https://img.example/1024x1024.png" }));
    }
}
