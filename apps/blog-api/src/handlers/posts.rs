//! Post resource handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Post, PostDraft, PostId};
use blog_core::validation::ValidationError;
use blog_shared::dto::PostPayload;

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn validate(payload: &PostPayload) -> Result<PostDraft, ValidationError> {
    PostDraft::from_fields(
        payload.title.as_ref(),
        payload.img_src.as_ref(),
        payload.pelicula.as_ref(),
        payload.content.as_ref(),
    )
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{post_id}
///
/// Always an array: one element on a hit, empty on a miss.
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::from(path.into_inner());

    let posts: Vec<Post> = state.posts.get_by_id(&id).await?.into_iter().collect();
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = validate(&body)?;

    let outcome = state.posts.create(&draft).await?;
    tracing::info!(
        insert_id = ?outcome.insert_id,
        affected_rows = outcome.affected_rows,
        "Post created"
    );

    Ok(HttpResponse::Ok().json(outcome))
}

/// PUT /posts/{post_id}
///
/// All four fields are required. A miss reports zero affected rows.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = validate(&body)?;
    let id = PostId::from(path.into_inner());

    let outcome = state.posts.update(&id, &draft).await?;
    tracing::info!(post_id = %id, affected_rows = outcome.affected_rows, "Post updated");

    Ok(HttpResponse::Ok().json(outcome))
}

/// DELETE /posts/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::from(path.into_inner());

    let outcome = state.posts.delete(&id).await?;
    tracing::info!(post_id = %id, affected_rows = outcome.affected_rows, "Post deleted");

    Ok(HttpResponse::Ok().json(outcome))
}
