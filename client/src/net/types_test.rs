use super::*;

fn sample_user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "1",
        "email": "jane.doe@example.com",
        "firstName": "Jane",
        "lastName": "Doe",
        "createdAt": "2024-03-05T14:07:00.000Z",
        "updatedAt": "2024-03-05T14:07:00.000Z"
    })
}

#[test]
fn user_deserializes_camel_case_fields() {
    let user: User = serde_json::from_value(sample_user_json()).unwrap();
    assert_eq!(user.first_name, "Jane");
    assert_eq!(user.last_name, "Doe");
    assert_eq!(user.created_at, "2024-03-05T14:07:00.000Z");
    assert_eq!(user.full_name(), "Jane Doe");
}

#[test]
fn register_request_serializes_camel_case_fields() {
    let req = RegisterRequest {
        email: "a@b.co".to_owned(),
        password: "longenough".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "email": "a@b.co",
            "password": "longenough",
            "firstName": "Ada",
            "lastName": "Lovelace"
        })
    );
}

#[test]
fn login_envelope_parses_access_token() {
    let body = serde_json::json!({
        "success": true,
        "message": "Login successful",
        "data": { "accessToken": "tok1", "user": sample_user_json() }
    });
    let env: ApiEnvelope<LoginData> = serde_json::from_value(body).unwrap();
    assert!(env.success);
    assert_eq!(env.data.unwrap().access_token, "tok1");
}

#[test]
fn envelope_tolerates_missing_optional_fields() {
    let env: ApiEnvelope<Vec<User>> = serde_json::from_value(serde_json::json!({ "success": false })).unwrap();
    assert!(!env.success);
    assert!(env.message.is_empty());
    assert!(env.data.is_none());
    assert!(env.error.is_none());
}

#[test]
fn into_data_returns_payload_on_success() {
    let env = ApiEnvelope { success: true, message: String::new(), data: Some(3), error: None };
    assert_eq!(env.into_data(Operation::ListUsers), Ok(3));
}

#[test]
fn into_data_surfaces_message_when_unsuccessful() {
    let env: ApiEnvelope<u8> = ApiEnvelope {
        success: false,
        message: "email already exists".to_owned(),
        data: None,
        error: Some("Conflict".to_owned()),
    };
    assert_eq!(
        env.into_data(Operation::Register),
        Err(AuthError::ServerMessage("email already exists".to_owned()))
    );
}

#[test]
fn into_data_falls_back_to_operation_default() {
    let env: ApiEnvelope<u8> = ApiEnvelope { success: true, message: String::new(), data: None, error: None };
    assert_eq!(
        env.into_data(Operation::Login),
        Err(AuthError::Unknown(Operation::Login.default_message()))
    );
}

#[test]
fn success_message_without_data_is_not_an_error_message() {
    let env: ApiEnvelope<u8> = ApiEnvelope {
        success: true,
        message: "User registered successfully".to_owned(),
        data: None,
        error: None,
    };
    assert_eq!(
        env.into_data(Operation::Register),
        Err(AuthError::Unknown(Operation::Register.default_message()))
    );
}

#[test]
fn unsuccessful_envelope_without_message_uses_default() {
    let env: ApiEnvelope<u8> = ApiEnvelope { success: false, message: "  ".to_owned(), data: Some(1), error: None };
    assert_eq!(
        env.into_data(Operation::ListUsers),
        Err(AuthError::Unknown(Operation::ListUsers.default_message()))
    );
}
