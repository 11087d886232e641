mod common;

use actix_web::http::{StatusCode, header};
use actix_web::test;

use blogly_core::domain::NewPost;
use blogly_core::ports::{BaseRepository, PostRepository, UserRepository};
use common::{body_text, location, seed_user, test_app, test_state};

#[actix_web::test]
async fn test_home_redirects_to_users() {
    let state = test_state().await;
    let app = test_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");
}

#[actix_web::test]
async fn test_display_users() {
    let state = test_state().await;
    seed_user(&state, "Test", "User").await;
    let app = test_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Test User"));
}

#[actix_web::test]
async fn test_show_user_details() {
    let state = test_state().await;
    let user = seed_user(&state, "Test", "User").await;
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Test User"));
    assert!(html.contains("Edit"));
    assert!(html.contains("Delete"));
}

#[actix_web::test]
async fn test_missing_user_is_404() {
    let state = test_state().await;
    let app = test_app!(state);

    for uri in ["/users/999", "/users/999/edit", "/users/999/delete", "/users/999/posts/new"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn test_create_user_form() {
    let state = test_state().await;
    let app = test_app!(state);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/users/new").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("<h1>Create a user</h1>"));
}

#[actix_web::test]
async fn test_create_user() {
    let state = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/users/new")
        .set_form([("first-name", "Test"), ("last-name", "User 2"), ("image-url", "")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Test User 2"));
}

#[actix_web::test]
async fn test_create_user_without_image_field() {
    let state = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/users/new")
        .set_form([("first-name", "Test"), ("last-name", "User")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    assert!(body_text(resp).await.contains("Test User"));

    let users = state.users.find_all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].image_url, None);
}

#[actix_web::test]
async fn test_create_user_stores_null_image_url() {
    let state = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/users/new")
        .set_form([("first-name", "No"), ("last-name", "Picture"), ("image-url", "")])
        .to_request();
    test::call_service(&app, req).await;

    let users = state.users.find_all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].image_url, None);
}

#[actix_web::test]
async fn test_create_user_without_last_name_is_rejected() {
    let state = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/users/new")
        .set_form([("first-name", "Only")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(state.users.find_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_edit_user() {
    let state = test_state().await;
    let user = seed_user(&state, "Test", "User").await;
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}/edit", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains(r#"value="Test""#));

    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/edit", user.id))
        .set_form([
            ("first-name", "Renamed"),
            ("last-name", "Person"),
            ("image-url", "https://example.com/p.png"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/users/{}", user.id));

    let stored = state.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.full_name(), "Renamed Person");
    assert_eq!(stored.image_url.as_deref(), Some("https://example.com/p.png"));
}

#[actix_web::test]
async fn test_delete_user() {
    let state = test_state().await;
    let user = seed_user(&state, "Test", "User").await;
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}/delete", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");
    assert!(state.users.find_by_id(user.id).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_delete_user_with_posts_fails() {
    let state = test_state().await;
    let user = seed_user(&state, "Test", "User").await;
    state
        .posts
        .create_with_tags(NewPost::new(user.id, "Kept".to_string(), "Body".to_string()), &[])
        .await
        .unwrap();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/delete", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(state.users.find_by_id(user.id).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_health_reports_database_up() {
    let state = test_state().await;
    let app = test_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_text(resp).await, "ok");
}
