//! Integration tests for the ticket lifecycle.

mod support;

use http::StatusCode;

#[tokio::test]
async fn test_create_ticket_defaults() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (user_id, token) = app
        .user_with_token("Gina", "gina@x.com", "secret1", false)
        .await;

    let response = app
        .request(
            "POST",
            "/api/tickets",
            Some(serde_json::json!({
                "title": "Broken keyboard",
                "description": "Keys are sticky",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = &response.body["data"];
    assert!(data["ticket_number"].as_str().unwrap().starts_with("TICKET-"));
    assert_eq!(data["status"], "OPEN");
    assert_eq!(data["priority"], "MEDIUM");
    assert_eq!(data["created_by"].as_i64().unwrap(), user_id);
    assert!(data["resolved_at"].is_null());
    assert!(data["closed_at"].is_null());
}

#[tokio::test]
async fn test_create_accepts_caller_supplied_status() {
    // Creation with an arbitrary initial status is reference behavior,
    // preserved deliberately rather than forcing OPEN.
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, token) = app
        .user_with_token("Hank", "hank@x.com", "secret1", false)
        .await;

    let response = app
        .request(
            "POST",
            "/api/tickets",
            Some(serde_json::json!({
                "title": "Pre-resolved ticket",
                "description": "Logged after the fact",
                "status": "RESOLVED",
                "priority": "LOW",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["status"], "RESOLVED");
    assert_eq!(response.body["data"]["priority"], "LOW");
}

#[tokio::test]
async fn test_get_ticket_and_not_found() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, token) = app
        .user_with_token("Iris", "iris@x.com", "secret1", false)
        .await;
    let ticket_id = app.create_ticket(&token, "Findable ticket").await;

    let response = app
        .request("GET", &format!("/api/tickets/{ticket_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Findable ticket");

    let missing = app
        .request("GET", "/api/tickets/999999999", None, Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_any_authenticated_user_can_view_anyones_ticket() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, owner_token) = app
        .user_with_token("Jack", "jack@x.com", "secret1", false)
        .await;
    let (_, other_token) = app
        .user_with_token("Kate", "kate@x.com", "secret1", false)
        .await;

    let ticket_id = app.create_ticket(&owner_token, "Jack's ticket").await;

    // View-by-id is deliberately not ownership-scoped.
    let response = app
        .request(
            "GET",
            &format!("/api/tickets/{ticket_id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_status_transitions_stamp_and_keep_history() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, user_token) = app
        .user_with_token("Luke", "luke@x.com", "secret1", false)
        .await;
    let (_, admin_token) = app
        .user_with_token("Mona", "mona.admin@x.com", "secret1", true)
        .await;

    let ticket_id = app.create_ticket(&user_token, "Lifecycle ticket").await;
    let status_path = format!("/api/tickets/{ticket_id}/status");

    // OPEN -> RESOLVED stamps resolved_at.
    let resolved = app
        .request(
            "PUT",
            &status_path,
            Some(serde_json::json!({"status": "RESOLVED"})),
            Some(&admin_token),
        )
        .await;
    assert_eq!(resolved.status, StatusCode::OK);
    let resolved_at = resolved.body["data"]["resolved_at"].as_str().unwrap().to_string();

    // RESOLVED -> OPEN leaves resolved_at untouched.
    let reopened = app
        .request(
            "PUT",
            &status_path,
            Some(serde_json::json!({"status": "OPEN"})),
            Some(&admin_token),
        )
        .await;
    assert_eq!(reopened.status, StatusCode::OK);
    assert_eq!(
        reopened.body["data"]["resolved_at"].as_str().unwrap(),
        resolved_at,
        "re-opening must not clear or change resolved_at"
    );
}

#[tokio::test]
async fn test_reclosing_updates_closed_at_to_latest() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, admin_token) = app
        .user_with_token("Nora", "nora.admin@x.com", "secret1", true)
        .await;

    let ticket_id = app.create_ticket(&admin_token, "Re-closed ticket").await;
    let status_path = format!("/api/tickets/{ticket_id}/status");

    let first = app
        .request(
            "PUT",
            &status_path,
            Some(serde_json::json!({"status": "CLOSED"})),
            Some(&admin_token),
        )
        .await;
    let first_closed_at = first.body["data"]["closed_at"].as_str().unwrap().to_string();

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    app.request(
        "PUT",
        &status_path,
        Some(serde_json::json!({"status": "OPEN"})),
        Some(&admin_token),
    )
    .await;

    let second = app
        .request(
            "PUT",
            &status_path,
            Some(serde_json::json!({"status": "CLOSED"})),
            Some(&admin_token),
        )
        .await;
    let second_closed_at = second.body["data"]["closed_at"].as_str().unwrap().to_string();

    let first_ts = chrono::DateTime::parse_from_rfc3339(&first_closed_at).unwrap();
    let second_ts = chrono::DateTime::parse_from_rfc3339(&second_closed_at).unwrap();
    assert!(
        second_ts > first_ts,
        "closed_at reflects the most recent CLOSED transition"
    );
}

#[tokio::test]
async fn test_content_edit_cannot_change_status() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, token) = app
        .user_with_token("Omar", "omar@x.com", "secret1", false)
        .await;
    let ticket_id = app.create_ticket(&token, "Content-only edit").await;

    // A status field on the content endpoint is ignored; status moves only
    // through the admin status endpoint.
    let response = app
        .request(
            "PUT",
            &format!("/api/tickets/{ticket_id}"),
            Some(serde_json::json!({
                "title": "Renamed",
                "status": "CLOSED",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Renamed");
    assert_eq!(response.body["data"]["status"], "OPEN");
}

#[tokio::test]
async fn test_content_edit_keeps_absent_fields() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, token) = app
        .user_with_token("Pia", "pia@x.com", "secret1", false)
        .await;
    let ticket_id = app.create_ticket(&token, "Partial edit").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/tickets/{ticket_id}"),
            Some(serde_json::json!({
                "priority": "URGENT",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["priority"], "URGENT");
    assert_eq!(response.body["data"]["title"], "Partial edit");
    assert_eq!(
        response.body["data"]["description"],
        "created by integration test"
    );
}

#[tokio::test]
async fn test_delete_ticket() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, token) = app
        .user_with_token("Quin", "quin@x.com", "secret1", false)
        .await;
    let ticket_id = app.create_ticket(&token, "Doomed ticket").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/tickets/{ticket_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/tickets/{ticket_id}"), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_my_tickets_is_scoped_to_caller() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (mine_id, my_token) = app
        .user_with_token("Rita", "rita@x.com", "secret1", false)
        .await;
    let (_, other_token) = app
        .user_with_token("Saul", "saul@x.com", "secret1", false)
        .await;

    app.create_ticket(&my_token, "Rita's ticket").await;
    app.create_ticket(&other_token, "Saul's ticket").await;

    let response = app
        .request("GET", "/api/tickets/my-tickets", None, Some(&my_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let items = response.body["data"]["items"].as_array().unwrap();
    assert!(!items.is_empty());
    assert!(
        items
            .iter()
            .all(|t| t["created_by"].as_i64().unwrap() == mine_id)
    );
}
