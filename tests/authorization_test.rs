//! Integration tests for the authorization rules.

mod support;

use http::StatusCode;

#[tokio::test]
async fn test_listing_all_tickets_is_admin_only() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, user_token) = app
        .user_with_token("Tess", "tess@x.com", "secret1", false)
        .await;
    let (_, admin_token) = app
        .user_with_token("Ugo", "ugo.admin@x.com", "secret1", true)
        .await;

    let denied = app
        .request("GET", "/api/tickets", None, Some(&user_token))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let allowed = app
        .request("GET", "/api/tickets", None, Some(&admin_token))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);
}

#[tokio::test]
async fn test_user_cannot_change_status_even_on_own_ticket() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, user_token) = app
        .user_with_token("Vera", "vera@x.com", "secret1", false)
        .await;
    let ticket_id = app.create_ticket(&user_token, "Vera's own ticket").await;

    // Ownership does not matter: status changes are role-gated.
    let response = app
        .request(
            "PUT",
            &format!("/api/tickets/{ticket_id}/status"),
            Some(serde_json::json!({"status": "RESOLVED"})),
            Some(&user_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["message"],
        "Access denied. Insufficient permissions"
    );
}

#[tokio::test]
async fn test_owner_may_edit_but_stranger_may_not() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, owner_token) = app
        .user_with_token("Walt", "walt@x.com", "secret1", false)
        .await;
    let (_, other_token) = app
        .user_with_token("Xena", "xena@x.com", "secret1", false)
        .await;

    let ticket_id = app.create_ticket(&owner_token, "Walt's ticket").await;
    let path = format!("/api/tickets/{ticket_id}");
    let body = serde_json::json!({"title": "Edited title"});

    let allowed = app
        .request("PUT", &path, Some(body.clone()), Some(&owner_token))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);

    let denied = app
        .request("PUT", &path, Some(body), Some(&other_token))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(
        denied.body["message"],
        "Access denied. Not the resource owner"
    );
}

#[tokio::test]
async fn test_admin_may_edit_and_delete_any_ticket() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, owner_token) = app
        .user_with_token("Yara", "yara@x.com", "secret1", false)
        .await;
    let (_, admin_token) = app
        .user_with_token("Zack", "zack.admin@x.com", "secret1", true)
        .await;

    let ticket_id = app.create_ticket(&owner_token, "Yara's ticket").await;

    let edited = app
        .request(
            "PUT",
            &format!("/api/tickets/{ticket_id}"),
            Some(serde_json::json!({"title": "Admin edit"})),
            Some(&admin_token),
        )
        .await;
    assert_eq!(edited.status, StatusCode::OK);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/tickets/{ticket_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
}

#[tokio::test]
async fn test_stranger_may_not_delete() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    let (_, owner_token) = app
        .user_with_token("Abel", "abel@x.com", "secret1", false)
        .await;
    let (_, other_token) = app
        .user_with_token("Bess", "bess@x.com", "secret1", false)
        .await;

    let ticket_id = app.create_ticket(&owner_token, "Abel's ticket").await;

    let denied = app
        .request(
            "DELETE",
            &format!("/api/tickets/{ticket_id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_ticket_routes_require_authentication() {
    let Some(app) = support::TestApp::try_new().await else {
        eprintln!("skipping: test database unavailable");
        return;
    };

    for (method, path) in [
        ("GET", "/api/tickets"),
        ("GET", "/api/tickets/my-tickets"),
        ("GET", "/api/tickets/1"),
        ("POST", "/api/tickets"),
        ("PUT", "/api/tickets/1"),
        ("PUT", "/api/tickets/1/status"),
        ("DELETE", "/api/tickets/1"),
    ] {
        let response = app.request(method, path, None, None).await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{method} {path} should require a token"
        );
    }
}
