//! Post pages, created under their author.

use actix_web::{HttpResponse, web};
use minijinja::context;

use blogly_core::DomainError;
use blogly_core::domain::{NewPost, Post};
use blogly_core::ports::{BaseRepository, PostRepository, TagRepository};
use blogly_shared::PostForm;

use super::users::find_user;
use super::{page, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;

async fn find_post(state: &AppState, id: i32) -> Result<Post, DomainError> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Post", id))
}

/// Keep only the submitted tag IDs that name existing tags.
async fn known_tag_ids(state: &AppState, submitted: &[i32]) -> Result<Vec<i32>, DomainError> {
    let tags = state.tags.find_by_ids(submitted).await?;
    Ok(tags.into_iter().map(|t| t.id).collect())
}

/// GET /users/{id}/posts/new
pub async fn new_post_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;
    let tags = state.tags.find_all().await?;

    let html = state
        .templates
        .render("posts/new.html", context! { user, tags })?;
    Ok(page(html))
}

/// POST /users/{id}/posts/new
pub async fn create_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;
    let form = PostForm::from_urlencoded(&body)?;
    let tag_ids = known_tag_ids(&state, &form.tag_ids).await?;

    let post = state
        .posts
        .create_with_tags(NewPost::new(user.id, form.title, form.content), &tag_ids)
        .await?;
    tracing::info!(post = %post, "Post created");

    Ok(redirect(format!("/users/{}", user.id)))
}

/// GET /posts/{id}
pub async fn show_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;
    let user = find_user(&state, post.user_id).await?;
    let tags = state.posts.list_tags_for_post(post.id).await?;

    let html = state
        .templates
        .render("posts/detail.html", context! { post, user, tags })?;
    Ok(page(html))
}

/// GET /posts/{id}/edit
pub async fn edit_post_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;
    let tags = state.tags.find_all().await?;
    let selected: Vec<i32> = state
        .posts
        .list_tags_for_post(post.id)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    let html = state
        .templates
        .render("posts/edit.html", context! { post, tags, selected })?;
    Ok(page(html))
}

/// POST /posts/{id}/edit
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let mut post = find_post(&state, path.into_inner()).await?;
    let form = PostForm::from_urlencoded(&body)?;
    let tag_ids = known_tag_ids(&state, &form.tag_ids).await?;

    post.title = form.title;
    post.content = form.content;

    let post = state.posts.update_with_tags(post, &tag_ids).await?;
    tracing::info!(post = %post, "Post updated");

    Ok(redirect(format!("/posts/{}", post.id)))
}

/// GET|POST /posts/{id}/delete
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    state.posts.delete(post.id).await?;
    tracing::info!(post = %post, "Post deleted");

    Ok(redirect(format!("/users/{}", post.user_id)))
}
