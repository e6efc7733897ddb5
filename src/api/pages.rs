//! Questionnaire, results and breakdown pages

use std::collections::HashMap;

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, post, web};

use crate::api::error::ApiError;
use crate::api::html;
use crate::service::QuizService;
use crate::service::intake::{IntakeError, Selection};
use crate::service::transport::{DATA_PARAM, TransportError};

/// Raw `data` query value, percent-decoded. Never fails on a malformed query.
fn data_param(req: &HttpRequest) -> Option<String> {
    url::form_urlencoded::parse(req.query_string().as_bytes())
        .find(|(key, _)| key == DATA_PARAM)
        .map(|(_, value)| value.into_owned())
}

fn html_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(body)
}

/// Placeholder page for a transport failure on `page`
fn transport_failure(page: &str, err: &TransportError) -> HttpResponse {
    let message = match err {
        TransportError::Missing => format!("No {} data found.", page),
        TransportError::Invalid(e) => {
            tracing::warn!(page = page, error = %e, "Rejected page data");
            format!("Invalid {} data.", page)
        }
    };
    html_response(html::message_page(&message))
}

#[get("/")]
pub async fn questionnaire() -> HttpResponse {
    html_response(html::questionnaire_page(&Selection::default(), None))
}

/// Validate the submitted form and hand the answers to the results page
#[post("/")]
pub async fn submit(
    service: web::Data<QuizService>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let selection = Selection::from_form(&form);

    match selection.complete() {
        Ok(answers) => {
            let location = service.results_link(&answers)?;
            tracing::debug!(location = %location, "Questionnaire complete");
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish())
        }
        Err(e) => {
            let IntakeError::Incomplete { missing } = &e;
            tracing::info!(missing = ?missing, "Incomplete questionnaire submission");
            Ok(HttpResponse::UnprocessableEntity()
                .content_type(header::ContentType::html())
                .body(html::questionnaire_page(&selection, Some(&e.to_string()))))
        }
    }
}

#[get("/results")]
pub async fn results(service: web::Data<QuizService>, req: HttpRequest) -> HttpResponse {
    match service.snapshot(data_param(&req).as_deref()) {
        Ok(view) => {
            tracing::info!(
                dominant = %view.dominant,
                severity = %view.severity,
                "Rendered results snapshot"
            );
            html_response(html::results_page(&view, service.price_label()))
        }
        Err(e) => transport_failure("results", &e),
    }
}

#[get("/breakdown")]
pub async fn breakdown(service: web::Data<QuizService>, req: HttpRequest) -> HttpResponse {
    match service.breakdown(data_param(&req).as_deref()) {
        Ok(view) => html_response(html::breakdown_page(&view)),
        Err(e) => transport_failure("breakdown", &e),
    }
}

/// Configure page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(questionnaire)
        .service(submit)
        .service(results)
        .service(breakdown);
}
