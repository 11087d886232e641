//! User pages.

use actix_web::{HttpResponse, web};
use minijinja::context;

use blogly_core::DomainError;
use blogly_core::domain::{NewUser, User};
use blogly_core::ports::{BaseRepository, UserRepository};
use blogly_shared::UserForm;

use super::{page, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Load a user or fail with 404.
pub(crate) async fn find_user(state: &AppState, id: i32) -> Result<User, DomainError> {
    state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("User", id))
}

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;

    let html = state
        .templates
        .render("users/list.html", context! { users })?;
    Ok(page(html))
}

/// GET /users/new
pub async fn new_user_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let html = state.templates.render("users/new.html", context! {})?;
    Ok(page(html))
}

/// POST /users/new
pub async fn create_user(
    state: web::Data<AppState>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let image_url = form.image_url();

    let user = state
        .users
        .insert(NewUser::new(form.first_name, form.last_name, image_url))
        .await?;
    tracing::info!(user = %user, "User created");

    Ok(redirect("/users"))
}

/// GET /users/{id}
pub async fn show_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;
    let posts = state.users.list_posts_for_user(user.id).await?;

    let html = state
        .templates
        .render("users/detail.html", context! { user, posts })?;
    Ok(page(html))
}

/// GET /users/{id}/edit
pub async fn edit_user_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;

    let html = state
        .templates
        .render("users/edit.html", context! { user })?;
    Ok(page(html))
}

/// POST /users/{id}/edit
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    let mut user = find_user(&state, path.into_inner()).await?;
    let form = form.into_inner();

    user.image_url = form.image_url();
    user.first_name = form.first_name;
    user.last_name = form.last_name;

    let user = state.users.update(user).await?;
    tracing::info!(user = %user, "User updated");

    Ok(redirect(format!("/users/{}", user.id)))
}

/// GET|POST /users/{id}/delete
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;

    state.users.delete(user.id).await?;
    tracing::info!(user = %user, "User deleted");

    Ok(redirect("/users"))
}
