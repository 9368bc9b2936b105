mod common;

use axum::http::StatusCode;
use common::{assert_redirect, body_string, flash_cookie, flash_set_cookie, TestApp};

#[tokio::test]
async fn index_reports_no_groups() {
    let app = TestApp::new().await;

    let response = app.get("/Group").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("No Groups found!"));
}

#[tokio::test]
async fn index_reports_single_group() {
    let app = TestApp::new().await;
    app.insert_group("Admins").await;

    let body = body_string(app.get("/Group").await).await;
    assert!(body.contains("1 Group found."));
    assert!(body.contains("Admins"));
}

#[tokio::test]
async fn index_reports_many_groups() {
    let app = TestApp::new().await;
    for title in ["Admins", "Editors", "Guests"] {
        app.insert_group(title).await;
    }

    let body = body_string(app.get("/Group/Index").await).await;
    assert!(body.contains("3 Groups found."));
}

#[tokio::test]
async fn details_of_missing_group_shows_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/Group/Details/42").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Group not found!"));
    assert!(!body.contains("class=\"title\""));
}

#[tokio::test]
async fn details_show_group_title() {
    let app = TestApp::new().await;
    let id = app.insert_group("Admins").await;

    let body = body_string(app.get(&format!("/Group/Details/{id}")).await).await;
    assert!(body.contains("<dd class=\"title\">Admins</dd>"));
    assert!(body.contains("No users in this group."));
}

#[tokio::test]
async fn create_form_renders_empty() {
    let app = TestApp::new().await;

    let response = app.get("/Group/Create").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("action=\"/Group/Create\""));
}

#[tokio::test]
async fn invalid_create_redisplays_form_without_saving() {
    let app = TestApp::new().await;

    let response = app.post_form("/Group/Create", "title=++").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("This field is required."));
    assert_eq!(app.count("groups").await, 0);
}

#[tokio::test]
async fn create_redirects_to_index_with_message() {
    let app = TestApp::new().await;

    let response = app.post_form("/Group/Create", "title=Admins").await;
    assert_redirect(&response, "/Group");
    assert_eq!(app.count("groups").await, 1);

    let cookie = flash_cookie(&response);
    let body = body_string(app.get_with_cookie("/Group", &cookie).await).await;
    assert!(body.contains("Group created successfully."));
    assert!(body.contains("1 Group found."));
}

#[tokio::test]
async fn title_length_is_checked_after_trimming() {
    let app = TestApp::new().await;
    let title = "x".repeat(99);

    let response = app
        .post_form("/Group/Create", &format!("title={title}+++++"))
        .await;
    assert_redirect(&response, "/Group");

    let (stored,): (String,) = sqlx::query_as("SELECT title FROM groups")
        .fetch_one(&app.db)
        .await
        .unwrap();
    assert_eq!(stored, title);
}

#[tokio::test]
async fn duplicate_create_shows_service_message() {
    let app = TestApp::new().await;
    app.insert_group("Admins").await;

    let response = app.post_form("/Group/Create", "title=admins").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Group with the same title exists!"));
    assert!(body.contains("value=\"admins\""));
    assert_eq!(app.count("groups").await, 1);
}

#[tokio::test]
async fn edit_form_of_missing_group_shows_not_found() {
    let app = TestApp::new().await;

    let body = body_string(app.get("/Group/Edit/7").await).await;
    assert!(body.contains("Group not found!"));
    assert!(!body.contains("action=\"/Group/Edit\""));
}

#[tokio::test]
async fn edit_form_is_prefilled() {
    let app = TestApp::new().await;
    let id = app.insert_group("Admins").await;

    let body = body_string(app.get(&format!("/Group/Edit/{id}")).await).await;
    assert!(body.contains(&format!("name=\"id\" value=\"{id}\"")));
    assert!(body.contains("value=\"Admins\""));
}

#[tokio::test]
async fn edit_redirects_to_details() {
    let app = TestApp::new().await;
    let id = app.insert_group("Admins").await;

    let response = app
        .post_form("/Group/Edit", &format!("id={id}&title=Operators"))
        .await;
    assert_redirect(&response, &format!("/Group/Details/{id}"));

    let body = body_string(app.get(&format!("/Group/Details/{id}")).await).await;
    assert!(body.contains("Operators"));
}

#[tokio::test]
async fn invalid_edit_redisplays_form() {
    let app = TestApp::new().await;
    let id = app.insert_group("Admins").await;

    let response = app
        .post_form("/Group/Edit", &format!("id={id}&title="))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("This field is required."));

    let body = body_string(app.get(&format!("/Group/Details/{id}")).await).await;
    assert!(body.contains("Admins"));
}

#[tokio::test]
async fn edit_to_existing_title_shows_service_message() {
    let app = TestApp::new().await;
    app.insert_group("Admins").await;
    let id = app.insert_group("Editors").await;

    let response = app
        .post_form("/Group/Edit", &format!("id={id}&title=admins"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response)
        .await
        .contains("Group with the same title exists!"));

    let body = body_string(app.get(&format!("/Group/Details/{id}")).await).await;
    assert!(body.contains("<dd class=\"title\">Editors</dd>"));
}

#[tokio::test]
async fn edit_of_missing_group_shows_service_message() {
    let app = TestApp::new().await;

    let response = app.post_form("/Group/Edit", "id=99&title=Ghosts").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Group not found!"));
}

#[tokio::test]
async fn flash_message_is_shown_once() {
    let app = TestApp::new().await;

    let response = app.post_form("/Group/Create", "title=Admins").await;
    let cookie = flash_cookie(&response);

    let response = app.get_with_cookie("/Group", &cookie).await;
    assert!(flash_set_cookie(&response).contains("Max-Age=0"));
    let cleared = flash_cookie(&response);
    assert!(body_string(response)
        .await
        .contains("Group created successfully."));

    let body = body_string(app.get_with_cookie("/Group", &cleared).await).await;
    assert!(!body.contains("Group created successfully."));
    assert!(body.contains("1 Group found."));
}

#[tokio::test]
async fn delete_redirects_with_success_message() {
    let app = TestApp::new().await;
    let id = app.insert_group("Admins").await;

    let response = app.get(&format!("/Group/Delete/{id}")).await;
    assert_redirect(&response, "/Group");
    assert_eq!(app.count("groups").await, 0);

    let cookie = flash_cookie(&response);
    let body = body_string(app.get_with_cookie("/Group", &cookie).await).await;
    assert!(body.contains("Group deleted successfully."));
}

#[tokio::test]
async fn delete_of_missing_group_still_redirects() {
    let app = TestApp::new().await;

    let response = app.get("/Group/Delete/5").await;
    assert_redirect(&response, "/Group");

    let cookie = flash_cookie(&response);
    let body = body_string(app.get_with_cookie("/Group", &cookie).await).await;
    assert!(body.contains("Group not found!"));
}

#[tokio::test]
async fn delete_of_group_with_users_is_refused() {
    let app = TestApp::new().await;
    let id = app.insert_group("Admins").await;

    let response = app
        .post_form(
            "/User/Create",
            &format!("user_name=ada&password=secret&score=0&group_id={id}"),
        )
        .await;
    assert_redirect(&response, "/User");

    let response = app.get(&format!("/Group/Delete/{id}")).await;
    assert_redirect(&response, "/Group");
    assert_eq!(app.count("groups").await, 1);

    let cookie = flash_cookie(&response);
    let body = body_string(app.get_with_cookie("/Group", &cookie).await).await;
    assert!(body.contains("has relevant users!"));
}

#[tokio::test]
async fn root_redirects_to_groups() {
    let app = TestApp::new().await;

    let response = app.get("/").await;
    assert_redirect(&response, "/Group");
}

#[tokio::test]
async fn unknown_route_renders_not_found_page() {
    let app = TestApp::new().await;

    let response = app.get("/Nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Page not found!"));
}
