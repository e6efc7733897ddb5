//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::health::HealthStatus;
use crate::api::score::ScoreResponse;
use crate::model::{ClassificationResult, LoadCategory, Severity};

#[derive(OpenApi)]
#[openapi(
    info(title = "Load Calculator", description = "Decision, cognitive and emotional load scoring"),
    paths(crate::api::score::score, crate::api::health::liveness),
    components(schemas(
        ScoreResponse,
        ErrorResponse,
        HealthStatus,
        ClassificationResult,
        LoadCategory,
        Severity
    )),
    tags(
        (name = "scoring", description = "Answer set classification"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> Result<HttpResponse, ApiError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| ApiError::Internal(format!("Failed to render OpenAPI YAML: {}", e)))?;

    Ok(HttpResponse::Ok().content_type("text/yaml").body(yaml))
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
