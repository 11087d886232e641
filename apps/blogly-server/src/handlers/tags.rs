//! Tag pages.

use actix_web::{HttpResponse, web};
use minijinja::context;

use blogly_core::DomainError;
use blogly_core::domain::{NewTag, Tag};
use blogly_core::ports::{BaseRepository, TagRepository};
use blogly_shared::TagForm;

use super::{page, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;

async fn find_tag(state: &AppState, id: i32) -> Result<Tag, DomainError> {
    state
        .tags
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Tag", id))
}

/// GET /tags
pub async fn list_tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.tags.find_all().await?;

    let html = state.templates.render("tags/list.html", context! { tags })?;
    Ok(page(html))
}

/// GET /tags/new
pub async fn new_tag_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let html = state.templates.render("tags/new.html", context! {})?;
    Ok(page(html))
}

/// POST /tags/new
pub async fn create_tag(
    state: web::Data<AppState>,
    form: web::Form<TagForm>,
) -> AppResult<HttpResponse> {
    let name = form.into_inner().name.trim().to_string();

    let tag = state.tags.insert(NewTag::new(name)).await?;
    tracing::info!(tag = %tag, "Tag created");

    Ok(redirect("/tags"))
}

/// GET /tags/{id}
pub async fn show_tag(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let tag = find_tag(&state, path.into_inner()).await?;
    let posts = state.tags.list_posts_for_tag(tag.id).await?;

    let html = state
        .templates
        .render("tags/detail.html", context! { tag, posts })?;
    Ok(page(html))
}

/// GET /tags/{id}/edit
pub async fn edit_tag_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let tag = find_tag(&state, path.into_inner()).await?;

    let html = state.templates.render("tags/edit.html", context! { tag })?;
    Ok(page(html))
}

/// POST /tags/{id}/edit
pub async fn update_tag(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<TagForm>,
) -> AppResult<HttpResponse> {
    let mut tag = find_tag(&state, path.into_inner()).await?;
    tag.name = form.into_inner().name.trim().to_string();

    let tag = state.tags.update(tag).await?;
    tracing::info!(tag = %tag, "Tag updated");

    Ok(redirect(format!("/tags/{}", tag.id)))
}

/// GET|POST /tags/{id}/delete
pub async fn delete_tag(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let tag = find_tag(&state, path.into_inner()).await?;

    state.tags.delete(tag.id).await?;
    tracing::info!(tag = %tag, "Tag deleted");

    Ok(redirect("/tags"))
}
