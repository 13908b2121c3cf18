use super::*;
use crate::net::error::CONNECTIVITY_MESSAGE;
use crate::net::gateway::Method;
use crate::net::test_support::{ScriptedTransport, TEST_API, memory_store, service, user_json};
use futures::executor::block_on;

#[test]
fn register_posts_camel_case_payload_without_bearer() {
    let transport = ScriptedTransport::default();
    transport.reply(201, serde_json::json!({
        "success": true,
        "message": "User registered",
        "data": user_json("1", "Ada", "Lovelace")
    }));
    let store = memory_store();
    store.set_token("should-not-be-sent");
    let svc = service(&transport, &store);

    let payload = RegisterRequest {
        email: "ada@example.com".to_owned(),
        password: "analytical".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    };
    let env = block_on(svc.register(&payload)).unwrap();

    assert!(env.success);
    assert_eq!(env.data.unwrap().first_name, "Ada");
    let req = &transport.requests()[0];
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, format!("{TEST_API}/auth/register"));
    assert_eq!(req.header("Authorization"), None);
    let sent: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent["firstName"], "Ada");
    assert_eq!(sent["lastName"], "Lovelace");
}

#[test]
fn register_conflict_surfaces_server_message() {
    let transport = ScriptedTransport::default();
    transport.reply(409, serde_json::json!({ "success": false, "message": "email already exists" }));
    let store = memory_store();

    let err = block_on(service(&transport, &store).register(&RegisterRequest::default())).unwrap_err();

    assert_eq!(err.to_string(), "email already exists");
}

#[test]
fn login_returns_token_without_touching_store() {
    let transport = ScriptedTransport::default();
    transport.reply(200, serde_json::json!({
        "success": true,
        "message": "Login successful",
        "data": { "accessToken": "tok1", "user": user_json("1", "Jane", "Doe") }
    }));
    let store = memory_store();

    let env = block_on(service(&transport, &store).login(&LoginRequest {
        email: "jane@x.com".to_owned(),
        password: "SecurePass123!".to_owned(),
    }))
    .unwrap();

    assert_eq!(env.data.unwrap().access_token, "tok1");
    assert_eq!(store.get_token(), None);
}

#[test]
fn login_connection_failure_uses_connectivity_message() {
    let transport = ScriptedTransport::default();
    transport.fail(TransportError::Network("TypeError: Failed to fetch".to_owned()));
    let store = memory_store();

    let err = block_on(service(&transport, &store).login(&LoginRequest::default())).unwrap_err();

    assert_eq!(err.to_string(), CONNECTIVITY_MESSAGE);
}

#[test]
fn login_unexpected_error_uses_login_default() {
    let transport = ScriptedTransport::default();
    transport.reply_raw(502, "Bad Gateway");
    let store = memory_store();

    let err = block_on(service(&transport, &store).login(&LoginRequest::default())).unwrap_err();

    assert_eq!(err, AuthError::Unknown(Operation::Login.default_message()));
}

#[test]
fn list_users_sends_stored_bearer() {
    let transport = ScriptedTransport::default();
    transport.reply(200, serde_json::json!({
        "success": true,
        "message": "ok",
        "data": [user_json("1", "Jane", "Doe"), user_json("2", "John", "Roe")]
    }));
    let store = memory_store();
    store.set_token("tok1");

    let env = block_on(service(&transport, &store).list_users()).unwrap();

    let users = env.data.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].first_name, "John");
    let req = &transport.requests()[0];
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, format!("{TEST_API}/auth/users"));
    assert_eq!(req.header("Authorization"), Some("Bearer tok1"));
}

#[test]
fn list_users_without_token_sends_no_auth_header() {
    let transport = ScriptedTransport::default();
    transport.reply(200, serde_json::json!({ "success": true, "message": "ok", "data": [] }));
    let store = memory_store();

    block_on(service(&transport, &store).list_users()).unwrap();

    assert_eq!(transport.requests()[0].header("Authorization"), None);
}

#[test]
fn list_users_unauthorized_is_expired_and_store_untouched() {
    let transport = ScriptedTransport::default();
    transport.reply(401, serde_json::json!({ "message": "Unauthorized", "statusCode": 401 }));
    let store = memory_store();
    store.set_token("stale");

    let err = block_on(service(&transport, &store).list_users()).unwrap_err();

    assert!(err.is_authorization_expired());
    assert_eq!(store.get_token().as_deref(), Some("stale"));
}

#[test]
fn non_2xx_is_failure_even_with_success_envelope() {
    let transport = ScriptedTransport::default();
    transport.reply(500, serde_json::json!({ "success": true, "message": "" }));
    let store = memory_store();

    let err = block_on(service(&transport, &store).list_users()).unwrap_err();

    assert_eq!(err, AuthError::Unknown(Operation::ListUsers.default_message()));
}

#[test]
fn malformed_success_body_uses_operation_default() {
    let transport = ScriptedTransport::default();
    transport.reply_raw(200, "not json");
    let store = memory_store();

    let err = block_on(service(&transport, &store).register(&RegisterRequest::default())).unwrap_err();

    assert_eq!(err, AuthError::Unknown(Operation::Register.default_message()));
}
