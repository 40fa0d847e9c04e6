//! HTTP handlers and route configuration.

mod comments;
mod courses;
mod health;
mod posts;
mod users;

use actix_web::web;

use crate::middleware::error::{configure_extractors, route_not_found};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_extractors)
        .route("/health", web::get().to(health::health_check))
        // Courses
        .route("/courses", web::get().to(courses::list_courses))
        .route("/coursesfiltro/{name}", web::get().to(courses::course_posts))
        .route("/courseImplement", web::post().to(courses::create_course))
        // Posts
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list_posts))
                .route(web::post().to(posts::create_post)),
        )
        .service(
            web::resource("/posts/{post_id}")
                .route(web::get().to(posts::get_post))
                .route(web::put().to(posts::update_post))
                .route(web::delete().to(posts::delete_post)),
        )
        // Comments and users
        .route("/comments", web::post().to(comments::create_comment))
        .route("/createUser", web::post().to(users::create_user))
        .default_service(web::to(route_not_found));
}
