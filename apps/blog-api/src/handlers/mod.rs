//! HTTP handlers and route configuration.

mod index;
mod posts;


use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
///
/// Each route is registered with its method guard, so a known path hit with an
/// unsupported method falls through to the catch-all like any unknown path.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(index::index))
        .route("/posts", web::get().to(posts::list_posts))
        .route("/posts", web::post().to(posts::create_post))
        .route("/posts/{post_id}", web::get().to(posts::get_post))
        .route("/posts/{post_id}", web::put().to(posts::update_post))
        .route("/posts/{post_id}", web::delete().to(posts::delete_post))
        .default_service(web::to(index::not_implemented));
}
