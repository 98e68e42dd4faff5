//! Auth client against a mocked authentication endpoint.

use nightvolt_core::{AuthClient, AuthError, Credentials, Role};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials(role: Role) -> Credentials {
    Credentials {
        email: "nova@nightvolt.app".to_string(),
        password: "nightvolt-12345".to_string(),
        role,
    }
}

#[tokio::test]
async fn test_authenticate_posts_json_and_returns_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "nova@nightvolt.app",
            "password": "nightvolt-12345",
            "role": "artist",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": {
                "uid": "u-1",
                "email": "nova@nightvolt.app",
                "role": "artist",
                "label": "Volt Records",
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(format!("{}/auth", server.uri()));
    let user = client.authenticate(&credentials(Role::Artist)).await.unwrap();

    assert_eq!(user.uid, "u-1");
    assert_eq!(user.label, "Volt Records");
}

#[tokio::test]
async fn test_authenticate_sends_admin_role() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "email": "nova@nightvolt.app",
            "password": "nightvolt-12345",
            "role": "admin",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": {"uid": "root", "email": "nova@nightvolt.app", "role": "admin", "label": "NIGHTVOLT"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(server.uri());
    let user = client.authenticate(&credentials(Role::Admin)).await.unwrap();
    assert_eq!(user.role, "admin");
}

#[tokio::test]
async fn test_authenticate_surfaces_server_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": "bad password",
        })))
        .mount(&server)
        .await;

    let client = AuthClient::new(server.uri());
    let err = client
        .authenticate(&credentials(Role::Artist))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AuthError::Rejected {
            message: Some("bad password".to_string())
        }
    );
}

#[tokio::test]
async fn test_authenticate_non_json_error_page_is_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = AuthClient::new(server.uri());
    let err = client
        .authenticate(&credentials(Role::Artist))
        .await
        .unwrap_err();

    assert_eq!(err, AuthError::Rejected { message: None });
}

#[tokio::test]
async fn test_authenticate_unreachable_server_is_connection_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AuthClient::new(format!("http://{addr}/auth"));
    let err = client
        .authenticate(&credentials(Role::Artist))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Connection(_)), "got {err:?}");
}
