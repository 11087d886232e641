//! HTTP handlers and route configuration.

mod health;
mod posts;
mod tags;
mod users;

use actix_web::http::header;
use actix_web::{HttpResponse, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// Delete routes answer GET as well as POST so plain links keep working.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .route("/", web::get().to(home))
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/users")
            .route("", web::get().to(users::list_users))
            .route("/new", web::get().to(users::new_user_form))
            .route("/new", web::post().to(users::create_user))
            .route("/{id}", web::get().to(users::show_user))
            .route("/{id}/edit", web::get().to(users::edit_user_form))
            .route("/{id}/edit", web::post().to(users::update_user))
            .route("/{id}/delete", web::get().to(users::delete_user))
            .route("/{id}/delete", web::post().to(users::delete_user))
            .route("/{id}/posts/new", web::get().to(posts::new_post_form))
            .route("/{id}/posts/new", web::post().to(posts::create_post)),
    )
    .service(
        web::scope("/posts")
            .route("/{id}", web::get().to(posts::show_post))
            .route("/{id}/edit", web::get().to(posts::edit_post_form))
            .route("/{id}/edit", web::post().to(posts::update_post))
            .route("/{id}/delete", web::get().to(posts::delete_post))
            .route("/{id}/delete", web::post().to(posts::delete_post)),
    )
    .service(
        web::scope("/tags")
            .route("", web::get().to(tags::list_tags))
            .route("/new", web::get().to(tags::new_tag_form))
            .route("/new", web::post().to(tags::create_tag))
            .route("/{id}", web::get().to(tags::show_tag))
            .route("/{id}/edit", web::get().to(tags::edit_tag_form))
            .route("/{id}/edit", web::post().to(tags::update_tag))
            .route("/{id}/delete", web::get().to(tags::delete_tag))
            .route("/{id}/delete", web::post().to(tags::delete_tag)),
    );
}

/// GET / - the user list doubles as the home page.
async fn home() -> HttpResponse {
    redirect("/users")
}

/// 302 to `location`; every successful write ends here.
pub(crate) fn redirect(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.as_ref()))
        .finish()
}

/// 200 with a rendered page.
pub(crate) fn page(html: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(html)
}
