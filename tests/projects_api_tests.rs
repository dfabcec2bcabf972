
use portfolio_site::StorageBackend;
use reqwest::StatusCode;
use serde_json::Value;
use test_utils::*;

#[actix_rt::test]
async fn api_root_reports_running() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Portfolio API is running");
}

#[actix_rt::test]
async fn health_reports_the_memory_backend() {
    let app = TestApp::spawn().await;
    assert_eq!(app.state.storage, StorageBackend::Memory);

    let response = app
        .client
        .get(format!("{}/api/health", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "memory");
    assert_eq!(body["storage_status"], "OK");
}

#[actix_rt::test]
async fn listing_returns_seeded_projects_newest_first() {
    let app = TestApp::spawn().await;

    let projects = app.list_projects(None).await;
    let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();

    assert_eq!(
        titles,
        vec![
            "Adaptive AI Tutor",
            "Sketch to Image",
            "Blood Bank Management System"
        ]
    );
}

#[actix_rt::test]
async fn category_filter_narrows_the_listing() {
    let app = TestApp::spawn().await;

    let ai = app.list_projects(Some("AI")).await;
    assert_eq!(ai.len(), 2);
    assert!(ai.iter().all(|p| p.category == "AI"));

    let web = app.list_projects(Some("Web")).await;
    assert_eq!(web.len(), 1);
    assert_eq!(web[0].title, "Blood Bank Management System");
}

#[actix_rt::test]
async fn all_category_matches_the_unfiltered_listing() {
    let app = TestApp::spawn().await;

    let unfiltered = app.list_projects(None).await;
    let all = app.list_projects(Some("All")).await;

    let unfiltered_ids: Vec<&str> = unfiltered.iter().map(|p| p.id.as_str()).collect();
    let all_ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(unfiltered_ids, all_ids);
}

#[actix_rt::test]
async fn unknown_category_returns_an_empty_array() {
    let app = TestApp::spawn().await;

    let projects = app.list_projects(Some("Mobile")).await;
    assert!(projects.is_empty());
}

#[actix_rt::test]
async fn categories_with_spaces_survive_the_query_string() {
    let app = TestApp::spawn().await;
    app.create_project(&sample_project_request("Data Science"))
        .await;

    let projects = app.list_projects(Some("Data Science")).await;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].category, "Data Science");
}

#[actix_rt::test]
async fn created_project_is_listed_first() {
    let app = TestApp::spawn().await;

    let created = app.create_project(&sample_project_request("Web")).await;
    assert!(!created.id.is_empty());

    let projects = app.list_projects(None).await;
    assert_eq!(projects.len(), 4);
    assert_eq!(projects[0].id, created.id);
}

#[actix_rt::test]
async fn create_rejects_an_invalid_payload() {
    let app = TestApp::spawn().await;

    let mut request = sample_project_request("Web");
    request.github_url = "not a url".to_string();

    let response = app
        .client
        .post(format!("{}/api/projects", app.address))
        .json(&request)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    assert!(body["details"].is_array());
}

#[actix_rt::test]
async fn create_rejects_the_reserved_all_category() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/projects", app.address))
        .json(&sample_project_request("All"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn replace_updates_fields_but_keeps_the_id() {
    let app = TestApp::spawn().await;

    let mut changes = sample_project_request("Web");
    changes.title = "Rebuilt Blood Bank".to_string();

    let response = app
        .client
        .put(format!("{}/api/projects/3", app.address))
        .json(&changes)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["id"], "3");
    assert_eq!(updated["title"], "Rebuilt Blood Bank");

    let listed = app.list_projects(Some("Web")).await;
    assert!(listed.iter().any(|p| p.title == "Rebuilt Blood Bank"));
}

#[actix_rt::test]
async fn replace_of_a_missing_project_is_404() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .put(format!("{}/api/projects/does-not-exist", app.address))
        .json(&sample_project_request("Web"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn delete_removes_the_project() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .delete(format!("{}/api/projects/2", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let projects = app.list_projects(None).await;
    assert_eq!(projects.len(), 2);
    assert!(projects.iter().all(|p| p.id != "2"));

    let again = app
        .client
        .delete(format!("{}/api/projects/2", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
