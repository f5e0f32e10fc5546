//! Root greeting and the catch-all for unmatched routes.

use actix_web::{HttpRequest, HttpResponse, http::header::ContentType, web};

use crate::state::AppState;

/// Body of the catch-all response.
pub const NOT_IMPLEMENTED: &str = "Endpoint not implemented";

/// GET /
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(state.greeting.to_string())
}

/// Any request no route claimed. Answers 400, not 404.
pub async fn not_implemented(req: HttpRequest) -> HttpResponse {
    tracing::debug!(method = %req.method(), path = %req.path(), "No route matched");

    HttpResponse::BadRequest()
        .content_type(ContentType::plaintext())
        .body(NOT_IMPLEMENTED)
}
