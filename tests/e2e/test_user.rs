use crate::helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;

#[tokio::test]
async fn it_should_register_a_new_account() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/v1/user",
            &json!({
                "name": "Alice",
                "email": "alice@example.com",
                "password": "s3cret-enough",
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    let body = response.body.as_ref().unwrap();
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["name"].as_str(), Some("Alice"));
    assert_eq!(body["email"].as_str(), Some("alice@example.com"));
    assert!(body.get("created_at").is_some());
    assert!(body.get("updated_at").is_some());

    // No password material in the representation
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn it_should_reject_a_malformed_registration_email() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/v1/user",
            &json!({ "name": "X", "email": "nope", "password": "whatever" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Invalid email");
}

#[tokio::test]
async fn it_should_enforce_email_uniqueness() {
    let ctx = TestContext::new().await.unwrap();
    ctx.register_user("taken@example.com", "First").await.unwrap();

    let response = ctx
        .client
        .post(
            "/v1/user",
            &json!({
                "name": "Second",
                "email": "taken@example.com",
                "password": "different-password",
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::CONFLICT)
        .assert_error("Account already exists");
}

#[tokio::test]
async fn it_should_require_a_valid_token_for_profile_routes() {
    let ctx = TestContext::new().await.unwrap();

    let missing = ctx.client.get("/v1/user").await.unwrap();
    missing
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error("Unauthorized");

    let garbage = ctx
        .client
        .get_with_auth("/v1/user", "not.a.token")
        .await
        .unwrap();
    garbage
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error("Unauthorized");

    let delete = ctx.client.delete("/v1/user").await.unwrap();
    delete
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error("Unauthorized");
}

#[tokio::test]
async fn it_should_update_name_and_email() {
    let ctx = TestContext::new().await.unwrap();
    let token = ctx.register_and_login("old@example.com").await.unwrap();

    let response = ctx
        .client
        .put_with_auth(
            "/v1/user",
            &json!({ "name": "Renamed", "email": "new@example.com" }),
            &token,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["name"].as_str(), Some("Renamed"));
    assert_eq!(body["email"].as_str(), Some("new@example.com"));

    let profile = ctx.client.get_with_auth("/v1/user", &token).await.unwrap();
    assert_eq!(
        profile.body.as_ref().unwrap()["email"].as_str(),
        Some("new@example.com")
    );
}

#[tokio::test]
async fn it_should_reject_an_update_to_a_taken_email() {
    let ctx = TestContext::new().await.unwrap();
    ctx.register_user("first@example.com", "First").await.unwrap();
    let token = ctx.register_and_login("second@example.com").await.unwrap();

    let response = ctx
        .client
        .put_with_auth(
            "/v1/user",
            &json!({ "email": "first@example.com" }),
            &token,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::CONFLICT)
        .assert_error("Account already exists");
}

#[tokio::test]
async fn it_should_reject_an_update_with_a_malformed_email() {
    let ctx = TestContext::new().await.unwrap();
    let token = ctx.register_and_login("user@example.com").await.unwrap();

    let response = ctx
        .client
        .put_with_auth("/v1/user", &json!({ "email": "broken" }), &token)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Invalid email");

    // The rejected update left the account untouched
    let profile = ctx.client.get_with_auth("/v1/user", &token).await.unwrap();
    assert_eq!(
        profile.body.as_ref().unwrap()["email"].as_str(),
        Some("user@example.com")
    );
}

#[tokio::test]
async fn it_should_delete_the_account_and_invalidate_its_tokens() {
    let ctx = TestContext::new().await.unwrap();
    let token = ctx.register_and_login("gone@example.com").await.unwrap();

    let response = ctx.client.delete_with_auth("/v1/user", &token).await.unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    // The token now refers to a deleted user and is as invalid as a forged one
    let after = ctx.client.get_with_auth("/v1/user", &token).await.unwrap();
    after
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error("Unauthorized");

    let second_delete = ctx.client.delete_with_auth("/v1/user", &token).await.unwrap();
    second_delete.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn it_should_free_the_email_after_deletion() {
    let ctx = TestContext::new().await.unwrap();
    let token = ctx.register_and_login("recycled@example.com").await.unwrap();

    ctx.client
        .delete_with_auth("/v1/user", &token)
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    // No tombstones: the address is registrable again
    ctx.register_user("recycled@example.com", "Again").await.unwrap();
}

#[tokio::test]
async fn it_should_reject_a_malformed_json_payload() {
    let ctx = TestContext::new().await.unwrap();
    let token = ctx.register_and_login("user@example.com").await.unwrap();

    let response = ctx
        .client
        .post_raw_with_auth("/v2/feeds", "{not json", &token)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Invalid request payload");
}
