//! JSON scoring endpoint

use actix_web::{HttpResponse, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::model::{AnswerSet, ClassificationResult, LoadCategory, Severity};
use crate::service::QuizService;

/// Classification returned by the scoring endpoint. `secondary` is not part
/// of this payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreResponse {
    pub dominant: LoadCategory,
    pub severity: Severity,
    pub recovery: bool,
    pub reframe: bool,
}

impl From<ClassificationResult> for ScoreResponse {
    fn from(result: ClassificationResult) -> Self {
        Self {
            dominant: result.dominant,
            severity: result.severity,
            recovery: result.recovery,
            reframe: result.reframe,
        }
    }
}

/// Score an answer set
///
/// The body is a flat JSON object of question id to answer (`{"q1": 2, ...}`).
/// Missing or non-numeric answers count as 0.
#[utoipa::path(
    post,
    path = "/api/score",
    request_body(content = std::collections::HashMap<String, u8>, description = "Answers keyed by question id (q1..q10), each 0-3"),
    responses(
        (status = 200, description = "Answer set classified", body = ScoreResponse),
        (status = 400, description = "Body is not JSON", body = crate::api::error::ErrorResponse),
        (status = 405, description = "Method not allowed", body = crate::api::error::ErrorResponse)
    ),
    tag = "scoring"
)]
pub async fn score(
    service: web::Data<QuizService>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let answers: AnswerSet = if body.iter().all(u8::is_ascii_whitespace) {
        AnswerSet::new()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::BadRequest(format!("Body is not valid JSON: {}", e)))?
    };

    if answers.is_empty() {
        tracing::debug!("No answers in request body, scoring as all zeros");
    }

    let result = service.score(&answers);

    tracing::info!(
        answers = answers.len(),
        dominant = %result.dominant,
        severity = %result.severity,
        "Scored answer set"
    );

    Ok(HttpResponse::Ok().json(ScoreResponse::from(result)))
}

async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed { allow: "POST" })
}

/// Configure scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/score")
            .route(web::post().to(score))
            .default_service(web::to(method_not_allowed)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use crate::model::{OfferConfig, ScoringModel};

    fn app_data(model: ScoringModel) -> web::Data<QuizService> {
        web::Data::new(QuizService::new(model, OfferConfig::default()))
    }

    #[actix_web::test]
    async fn test_score_tie_example() {
        let app = test::init_service(
            App::new()
                .app_data(app_data(ScoringModel::Weighted))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/score")
            .set_json(json!({
                "q1": 3, "q2": 3, "q3": 3, "q4": 0, "q5": 3,
                "q6": 0, "q7": 0, "q8": 3, "q9": 0, "q10": 0
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "dominant": "decision",
                "severity": "high",
                "recovery": false,
                "reframe": false
            })
        );
    }

    #[actix_web::test]
    async fn test_score_flags_and_promotion() {
        let app = test::init_service(
            App::new()
                .app_data(app_data(ScoringModel::Weighted))
                .configure(configure),
        )
        .await;

        // q1 = 2 alone is moderate; q7 = 2 promotes it
        let req = test::TestRequest::post()
            .uri("/api/score")
            .set_json(json!({ "q1": 2, "q7": 2, "q10": "3" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dominant"], "decision");
        assert_eq!(body["severity"], "high");
        assert_eq!(body["recovery"], true);
        assert_eq!(body["reframe"], true);
        assert!(body.get("secondary").is_none());
    }

    #[actix_web::test]
    async fn test_score_uses_configured_model() {
        let app = test::init_service(
            App::new()
                .app_data(app_data(ScoringModel::Margin))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/score")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dominant"], "cognitive");
        assert_eq!(body["severity"], "moderate");
    }

    #[actix_web::test]
    async fn test_wrong_method_is_405() {
        let app = test::init_service(
            App::new()
                .app_data(app_data(ScoringModel::Weighted))
                .configure(configure),
        )
        .await;

        for req in [
            test::TestRequest::get().uri("/api/score").to_request(),
            test::TestRequest::put().uri("/api/score").to_request(),
            test::TestRequest::delete().uri("/api/score").to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Method not allowed");
        }
    }

    #[actix_web::test]
    async fn test_malformed_body_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(app_data(ScoringModel::Weighted))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/score")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"q1\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_empty_body_scores_as_zero() {
        let app = test::init_service(
            App::new()
                .app_data(app_data(ScoringModel::Weighted))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/score").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["severity"], "low");
        assert_eq!(body["recovery"], false);
    }
}
